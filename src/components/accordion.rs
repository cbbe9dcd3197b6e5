use yew::prelude::*;

/// Next open row after clicking `clicked`: clicking the open row closes it,
/// any other row replaces it.
pub fn toggle_row(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Accordions that open on their first row, like the project specs.
pub fn first_row_open(rows: usize) -> Option<usize> {
    (rows > 0).then_some(0)
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub meta: Option<AttrValue>,
    pub is_open: bool,
    pub on_toggle: Callback<()>,
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("accordion-item", props.is_open.then(|| "open"))}>
            <button class="accordion-question" onclick={toggle}>
                <span class="question-text">{&props.title}</span>
                if let Some(meta) = &props.meta {
                    <span class="question-meta">{meta}</span>
                }
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="accordion-answer">
                    { for props.children.iter() }
                </div>
            }
            <style>
                {r#"
                .accordion-item {
                    border-bottom: 1px solid rgba(6, 44, 32, 0.1);
                }
                .accordion-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    font-size: 1.15rem;
                    font-weight: 600;
                    color: #062c20;
                }
                .question-text {
                    flex: 1;
                }
                .question-meta {
                    font-size: 0.85rem;
                    color: #7cb342;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7cb342;
                }
                .accordion-answer {
                    padding-bottom: 1.5rem;
                    color: #4b5563;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_row_open() {
        let open = toggle_row(None, 1);
        assert_eq!(open, Some(1));
        let open = toggle_row(open, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_row(open, 2), None);
    }

    #[test]
    fn first_row_starts_open_unless_empty() {
        assert_eq!(first_row_open(6), Some(0));
        assert_eq!(toggle_row(first_row_open(6), 0), None);
        assert_eq!(first_row_open(0), None);
    }
}
