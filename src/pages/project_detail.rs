use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::accordion::{first_row_open, toggle_row, AccordionItem};
use crate::components::counter::Counter;
use crate::config::SUBNAV_SCROLL_OFFSET;
use crate::content::legal::PROJECT_SECTIONS;
use crate::content::projects::PROJECTS;
use crate::navigation::{nav_link, use_navigate, NavRequest, Page, RecordId};
use crate::records::resolve;
use crate::scroll_spy::use_scroll_spy;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub record: Option<RecordId>,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    info!("Rendering project detail page");
    let navigate = use_navigate();
    let spy = use_scroll_spy(&PROJECT_SECTIONS, SUBNAV_SCROLL_OFFSET);
    let resolution = resolve(&PROJECTS, props.record.as_ref());
    let spec_rows = resolution.as_ref().map_or(0, |r| r.record().specs.len());
    let open_spec = use_state(move || first_row_open(spec_rows));

    let Some(resolution) = resolution else {
        warn!("No projects to show");
        return html! {};
    };
    if resolution.is_fallback() {
        debug!("No project for {:?}, showing the first one", props.record);
    }
    let project = resolution.record();

    html! {
        <div class="project-page">
            <header class="project-hero" style={format!("background-image: url('{}')", project.hero_image)}>
                <div class="project-hero-overlay"></div>
                <div class="project-hero-content">
                    <div class="breadcrumb">
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                        {" / "}
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Portfolio))}>{"Portfolio"}</a>
                        {" / "}{project.code}
                    </div>
                    <span class="project-location">{project.location}</span>
                    <h1>{project.title}</h1>
                    <p>{project.summary}</p>
                </div>
            </header>

            <nav class="project-subnav">
                {
                    spy.tracker.sections().iter().map(|section| {
                        let scroll_to = spy.scroll_to.clone();
                        let id = section.id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to.emit(id);
                        });
                        html! {
                            <a
                                href="#"
                                key={id}
                                class={classes!("subnav-item", spy.tracker.is_active(id).then(|| "active"))}
                                {onclick}
                            >
                                <span>{section.number}</span>{section.title}
                            </a>
                        }
                    }).collect::<Html>()
                }
            </nav>

            <div class="project-body">
                <aside class="project-facts">
                    <dl>
                        <dt>{"Project Code"}</dt><dd>{project.code}</dd>
                        <dt>{"Structure"}</dt><dd>{project.structure}</dd>
                        <dt>{"Partner"}</dt><dd>{project.partner}</dd>
                        <dt>{"Commissioned"}</dt><dd>{project.date}</dd>
                        <dt>{"Total Asset Value"}</dt><dd>{project.total_asset_value}</dd>
                        <dt>{"Beneficiaries"}</dt><dd>{project.beneficiaries}</dd>
                        <dt>{"Vehicle"}</dt><dd>{project.spv}</dd>
                    </dl>
                </aside>

                <div class="project-sections">
                    <section id="context" class="project-section">
                        <h2>{"The Challenge"}</h2>
                        <p>{project.challenge}</p>
                        <h2>{"Our Solution"}</h2>
                        <p>{project.solution}</p>
                        <h2>{"The Outcome"}</h2>
                        <p>{project.outcome}</p>
                    </section>

                    <section id="technical" class="project-section">
                        <h2>{"Technical Data"}</h2>
                        {
                            project.specs.iter().enumerate().map(|(index, spec)| {
                                let on_toggle = {
                                    let open_spec = open_spec.clone();
                                    Callback::from(move |_: ()| open_spec.set(toggle_row(*open_spec, index)))
                                };
                                html! {
                                    <AccordionItem
                                        key={index}
                                        title={spec.label}
                                        meta={AttrValue::from(format!("{} • {}", spec.value, spec.sub))}
                                        is_open={*open_spec == Some(index)}
                                        {on_toggle}
                                    >
                                        <p>{spec.details}</p>
                                    </AccordionItem>
                                }
                            }).collect::<Html>()
                        }
                    </section>

                    <section id="impact" class="project-section">
                        <h2>{"Impact"}</h2>
                        <div class="metric-grid">
                            {
                                project.metrics.iter().map(|metric| html! {
                                    <div key={metric.label} class="metric-card">
                                        <div class="metric-value">
                                            <Counter target={metric.target} decimals={metric.decimals} suffix={metric.suffix} />
                                        </div>
                                        <h4>{metric.label}</h4>
                                        <p>{metric.desc}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </section>

                    <section id="media" class="project-section">
                        <h2>{"Media"}</h2>
                        <div class="gallery-grid">
                            { for project.gallery.iter().map(|src| html! { <img key={*src} src={*src} alt={project.title} /> }) }
                        </div>
                    </section>

                    <section id="lifecycle" class="project-section">
                        <h2>{"Lifecycle"}</h2>
                        <ol class="timeline">
                            {
                                project.timeline.iter().map(|step| html! {
                                    <li key={step.title}>
                                        <span class="timeline-date">{step.date}</span>
                                        <h4>{step.title}</h4>
                                        <p>{step.desc}</p>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ol>
                    </section>

                    <div class="project-next">
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Portfolio))}>{"← All projects"}</a>
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Contact))}>{"Discuss a similar project →"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .project-hero {
                    position: relative;
                    min-height: 80vh;
                    background-size: cover;
                    background-position: center;
                    display: flex;
                    align-items: flex-end;
                }
                .project-hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #062c20, rgba(6, 44, 32, 0.2));
                }
                .project-hero-content {
                    position: relative;
                    max-width: 1280px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    color: #fff;
                }
                .project-hero-content .breadcrumb a {
                    color: rgba(255, 255, 255, 0.7);
                }
                .project-location {
                    font-size: 0.8rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #a3d65c;
                }
                .project-hero-content h1 {
                    font-size: 4.5rem;
                    margin: 1rem 0;
                }
                .project-subnav {
                    position: sticky;
                    top: 64px;
                    z-index: 10;
                    display: flex;
                    gap: 2rem;
                    padding: 1rem 1.5rem;
                    background: #fff;
                    border-bottom: 1px solid #e5e7eb;
                    overflow-x: auto;
                }
                .subnav-item {
                    display: flex;
                    gap: 0.5rem;
                    color: #9ca3af;
                    text-decoration: none;
                    white-space: nowrap;
                    padding-bottom: 0.25rem;
                    border-bottom: 2px solid transparent;
                }
                .subnav-item span {
                    color: #a3d65c;
                }
                .subnav-item.active {
                    color: #062c20;
                    border-bottom-color: #a3d65c;
                }
                .project-body {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    display: grid;
                    grid-template-columns: 280px 1fr;
                    gap: 4rem;
                }
                .project-facts {
                    position: sticky;
                    top: 140px;
                    align-self: start;
                }
                .project-facts dt {
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #9ca3af;
                }
                .project-facts dd {
                    margin: 0.25rem 0 1.25rem;
                    font-weight: 600;
                    color: #062c20;
                }
                .project-section {
                    padding-bottom: 4rem;
                    margin-bottom: 4rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .project-section p {
                    color: #4b5563;
                    line-height: 1.8;
                }
                .metric-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .metric-card {
                    padding: 2rem;
                    border-radius: 0.7rem;
                    background: #f4f7ee;
                }
                .metric-value {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #062c20;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .gallery-grid img {
                    width: 100%;
                    height: 220px;
                    object-fit: cover;
                    border-radius: 0.7rem;
                }
                .timeline {
                    list-style: none;
                    padding: 0;
                    border-left: 2px solid #a3d65c;
                }
                .timeline li {
                    padding: 0 0 2rem 2rem;
                }
                .timeline-date {
                    font-family: monospace;
                    color: #7cb342;
                }
                .project-next {
                    display: flex;
                    justify-content: space-between;
                }
                .project-next a {
                    color: #062c20;
                    font-weight: 700;
                }
                @media (max-width: 1024px) {
                    .project-body,
                    .metric-grid,
                    .gallery-grid {
                        grid-template-columns: 1fr;
                    }
                    .project-facts {
                        position: static;
                    }
                }
                "#}
            </style>
        </div>
    }
}
