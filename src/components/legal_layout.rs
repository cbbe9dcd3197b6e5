use log::info;
use yew::prelude::*;

use crate::config::LEGAL_SCROLL_OFFSET;
use crate::content::legal::Clause;
use crate::scroll_spy::{use_scroll_spy, Section};

#[derive(Properties, PartialEq)]
pub struct LegalLayoutProps {
    pub title: AttrValue,
    pub updated: AttrValue,
    pub sections: &'static [Section],
    pub clauses: &'static [Clause],
    #[prop_or_default]
    pub children: Children,
}

/// Long-form legal document with a sticky table of contents that follows the
/// reader's position.
#[function_component(LegalLayout)]
pub fn legal_layout(props: &LegalLayoutProps) -> Html {
    let spy = use_scroll_spy(props.sections, LEGAL_SCROLL_OFFSET);

    let jump = |id: &'static str| {
        let scroll_to = spy.scroll_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Jumping to section {}", id);
            scroll_to.emit(id);
        })
    };

    html! {
        <div class="legal-page">
            <header class="legal-hero">
                <span class="legal-updated">{"Last updated: "}{&props.updated}</span>
                <h1>{&props.title}</h1>
            </header>
            <div class="legal-body">
                <aside class="legal-toc">
                    <span class="legal-toc-label">{"Contents"}</span>
                    {
                        spy.tracker.sections().iter().map(|section| html! {
                            <a
                                href="#"
                                key={section.id}
                                class={classes!("legal-toc-item", spy.tracker.is_active(section.id).then(|| "active"))}
                                onclick={jump(section.id)}
                            >
                                <span class="legal-toc-number">{section.number}</span>
                                {section.title}
                            </a>
                        }).collect::<Html>()
                    }
                </aside>
                <article class="legal-content">
                    {
                        props.sections.iter().map(|section| {
                            let paragraphs = props
                                .clauses
                                .iter()
                                .find(|clause| clause.section == section.id)
                                .map(|clause| clause.paragraphs)
                                .unwrap_or_default();
                            html! {
                                <section id={section.id} key={section.id} class="legal-section">
                                    <h2><span class="legal-section-number">{section.number}</span>{section.title}</h2>
                                    { for paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                                </section>
                            }
                        }).collect::<Html>()
                    }
                    { for props.children.iter() }
                </article>
            </div>
            <style>
                {r#"
                .legal-page {
                    background: #fafaf7;
                    min-height: 100vh;
                    padding-top: 8rem;
                }
                .legal-hero {
                    max-width: 1280px;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                }
                .legal-hero h1 {
                    font-size: 4rem;
                    color: #062c20;
                    margin: 1rem 0 0;
                }
                .legal-updated {
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #7cb342;
                }
                .legal-body {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                    display: grid;
                    grid-template-columns: 280px 1fr;
                    gap: 4rem;
                }
                .legal-toc {
                    position: sticky;
                    top: 120px;
                    align-self: start;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .legal-toc-label {
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #9ca3af;
                    margin-bottom: 0.5rem;
                }
                .legal-toc-item {
                    display: flex;
                    gap: 0.75rem;
                    padding: 0.6rem 1rem;
                    border-left: 2px solid transparent;
                    color: #6b7280;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .legal-toc-item.active {
                    border-left-color: #a3d65c;
                    color: #062c20;
                    font-weight: 600;
                    background: rgba(163, 214, 92, 0.1);
                }
                .legal-toc-number,
                .legal-section-number {
                    color: #a3d65c;
                    font-variant-numeric: tabular-nums;
                    margin-right: 0.75rem;
                }
                .legal-section {
                    padding-bottom: 3rem;
                    margin-bottom: 3rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .legal-section h2 {
                    font-size: 1.75rem;
                    color: #062c20;
                }
                .legal-section p {
                    color: #4b5563;
                    line-height: 1.8;
                }
                @media (max-width: 1024px) {
                    .legal-body {
                        grid-template-columns: 1fr;
                    }
                    .legal-toc {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
