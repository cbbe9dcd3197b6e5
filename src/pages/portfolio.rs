use log::info;
use yew::prelude::*;

use crate::components::accordion::toggle_row;
use crate::content::projects::{Project, PROJECTS};
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

const ALL: &str = "All";

/// Filter chips: "All" followed by every tag in first-seen order.
fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut out = vec![ALL];
    for tag in projects.iter().flat_map(|p| p.tags.iter().copied()) {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn in_category(project: &Project, category: &str) -> bool {
    category == ALL || project.tags.contains(&category)
}

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Grid,
    Accordion,
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    info!("Rendering portfolio page");
    let navigate = use_navigate();
    let category = use_state(|| ALL);
    let mode = use_state(|| ViewMode::Accordion);
    let open_row = use_state(|| Some(0usize));

    let visible: Vec<(usize, &'static Project)> = PROJECTS
        .iter()
        .enumerate()
        .filter(|(_, p)| in_category(p, *category))
        .collect();

    let set_mode = |next: ViewMode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(next))
    };

    let open_project = |project: &Project| nav_link(&navigate, NavRequest::detail(Page::ProjectDetail, project.key));

    html! {
        <div class="portfolio-page">
            <section class="portfolio-hero">
                <div class="breadcrumb">
                    <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                    {" / Portfolio"}
                </div>
                <h1>{"Assets in the "}<span class="accent">{"field."}</span></h1>
                <p>{"Every project is held in a ring-fenced SPV, monitored in real time and serviced by our own crews."}</p>
            </section>

            <section class="portfolio-controls">
                <div class="portfolio-filters">
                    {
                        categories(&PROJECTS).into_iter().map(|cat| {
                            let onclick = {
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| category.set(cat))
                            };
                            html! {
                                <button key={cat} class={classes!("filter-chip", (*category == cat).then(|| "active"))} {onclick}>
                                    {cat}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="portfolio-modes">
                    <button class={classes!((*mode == ViewMode::Grid).then(|| "active"))} onclick={set_mode(ViewMode::Grid)}>{"Grid"}</button>
                    <button class={classes!((*mode == ViewMode::Accordion).then(|| "active"))} onclick={set_mode(ViewMode::Accordion)}>{"List"}</button>
                </div>
            </section>

            <section class="portfolio-list">
                if *mode == ViewMode::Grid {
                    <div class="portfolio-grid">
                        {
                            visible.iter().map(|(_, project)| html! {
                                <div key={project.key} class="project-card" onclick={open_project(*project)}>
                                    <img src={project.hero_image} alt={project.title} />
                                    <span class="project-code">{project.code}</span>
                                    <h3>{project.title}</h3>
                                    <p>{project.location}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                } else {
                    {
                        visible.iter().map(|(index, project)| {
                            let index = *index;
                            let is_open = *open_row == Some(index);
                            let toggle = {
                                let open_row = open_row.clone();
                                Callback::from(move |_: MouseEvent| open_row.set(toggle_row(*open_row, index)))
                            };
                            html! {
                                <div key={project.key} class={classes!("project-row", is_open.then(|| "open"))}>
                                    <button class="project-row-header" onclick={toggle}>
                                        <span class="project-key">{project.key}</span>
                                        <h3>{project.title}</h3>
                                        <span class="project-year">{project.year}</span>
                                    </button>
                                    if is_open {
                                        <div class="project-row-body">
                                            <img src={project.hero_image} alt={project.title} />
                                            <div>
                                                <p>{project.summary}</p>
                                                <dl>
                                                    <dt>{"Structure"}</dt><dd>{project.structure}</dd>
                                                    <dt>{"Partner"}</dt><dd>{project.partner}</dd>
                                                    <dt>{"Asset Value"}</dt><dd>{project.total_asset_value}</dd>
                                                </dl>
                                                <div class="project-tags">
                                                    { for project.tags.iter().map(|tag| html! { <span key={*tag}>{*tag}</span> }) }
                                                </div>
                                                <a href="#" class="project-link" onclick={open_project(*project)}>{"View Case Study →"}</a>
                                            </div>
                                        </div>
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                }
            </section>
            <style>
                {r#"
                .portfolio-page > section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .portfolio-hero {
                    padding-top: 10rem !important;
                }
                .portfolio-hero h1 {
                    font-size: 4.5rem;
                    color: #062c20;
                }
                .portfolio-hero .accent {
                    color: #a3d65c;
                }
                .portfolio-controls {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .portfolio-filters,
                .portfolio-modes {
                    display: flex;
                    gap: 0.5rem;
                }
                .portfolio-controls button {
                    border: 1px solid #e5e7eb;
                    background: #fff;
                    border-radius: 999px;
                    padding: 0.5rem 1.2rem;
                    cursor: pointer;
                }
                .portfolio-controls button.active {
                    background: #062c20;
                    color: #fff;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .project-card {
                    cursor: pointer;
                }
                .project-card img,
                .project-row-body img {
                    width: 100%;
                    height: 260px;
                    object-fit: cover;
                    border-radius: 0.7rem;
                }
                .project-code,
                .project-key {
                    font-family: monospace;
                    color: #7cb342;
                }
                .project-row {
                    border-top: 1px solid #e5e7eb;
                }
                .project-row-header {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    padding: 2rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .project-row-header h3 {
                    flex: 1;
                    font-size: 2rem;
                    color: #062c20;
                    margin: 0;
                }
                .project-row-body {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    padding-bottom: 3rem;
                }
                .project-row-body dl {
                    display: grid;
                    grid-template-columns: auto 1fr;
                    gap: 0.5rem 1.5rem;
                }
                .project-row-body dt {
                    color: #9ca3af;
                }
                .project-tags {
                    display: flex;
                    gap: 0.5rem;
                }
                .project-tags span {
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: #f4f7ee;
                }
                .project-link {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #062c20;
                    font-weight: 700;
                }
                @media (max-width: 1024px) {
                    .portfolio-grid,
                    .project-row-body {
                        grid-template-columns: 1fr;
                    }
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
    fn categories_start_with_all_and_are_unique() {
        let cats = categories(&PROJECTS);
        assert_eq!(cats[0], ALL);
        let unique: std::collections::HashSet<_> = cats.iter().collect();
        assert_eq!(unique.len(), cats.len());
    }

    #[test]
    fn all_category_keeps_every_project() {
        assert!(PROJECTS.iter().all(|p| in_category(p, ALL)));
        assert!(PROJECTS.iter().any(|p| !in_category(p, "Storage")));
    }
}
