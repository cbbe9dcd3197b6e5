use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.dark.then(|| "dark"))}>
            <span class="section-eyebrow">{&props.eyebrow}</span>
            <h2 class="section-title">{&props.title}</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
            <style>
                {r#"
                .section-header {
                    max-width: 720px;
                    margin-bottom: 3rem;
                }
                .section-eyebrow {
                    display: inline-block;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #7cb342;
                    margin-bottom: 1rem;
                }
                .section-title {
                    font-size: 2.75rem;
                    line-height: 1.1;
                    color: #062c20;
                    margin: 0;
                }
                .section-header.dark .section-title {
                    color: #fff;
                }
                .section-subtitle {
                    margin-top: 1.25rem;
                    font-size: 1.1rem;
                    color: #6b7280;
                }
                .section-header.dark .section-subtitle {
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
        </div>
    }
}
