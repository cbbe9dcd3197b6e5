use log::info;
use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::hero::Hero;
use crate::components::section_header::SectionHeader;
use crate::content::articles::ARTICLES;
use crate::content::projects::MAP_LOCATIONS;
use crate::content::solutions::SOLUTIONS;
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

const PARTNERS: [&str; 5] = ["World Bank", "REA", "Agronomie", "Power Africa", "Shell Foundation"];

/// Articles featured in the Home news rail.
const NEWS_RAIL: usize = 4;

#[function_component(TrustBar)]
fn trust_bar() -> Html {
    // Repeated so the marquee never shows a gap.
    let marquee = PARTNERS.iter().cycle().take(PARTNERS.len() * 4).enumerate();
    html! {
        <section class="trust-bar">
            <p class="trust-label">{"Trusted by leading development partners"}</p>
            <div class="trust-track">
                { for marquee.map(|(i, name)| html! { <span key={i} class="trust-name">{*name}</span> }) }
            </div>
        </section>
    }
}

#[function_component(HubSection)]
fn hub_section() -> Html {
    let active = use_state(|| 0usize);

    html! {
        <section class="hub-section">
            <div class="home-container">
                <SectionHeader eyebrow="What We Do" title="Integrated Solutions & Infrastructure." />
                <div class="hub-tabs">
                    {
                        SOLUTIONS.iter().enumerate().map(|(index, solution)| {
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| active.set(index))
                            };
                            let is_active = *active == index;
                            html! {
                                <div key={index} class={classes!("hub-tab", is_active.then(|| "active"))} {onclick}>
                                    <span class="hub-tab-subtitle">{solution.subtitle}</span>
                                    <h3>{solution.title}</h3>
                                    if is_active {
                                        <p>{solution.description}</p>
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
                if let Some(solution) = SOLUTIONS.get(*active) {
                    <img class="hub-image" src={solution.image} alt={solution.title} />
                }
            </div>
        </section>
    }
}

#[function_component(MapSection)]
fn map_section() -> Html {
    let navigate = use_navigate();
    let selected = use_state(|| 0usize);
    let Some(location) = MAP_LOCATIONS.get(*selected) else {
        return html! {};
    };

    html! {
        <section class="map-section">
            <div class="home-container map-layout">
                <div class="map-canvas">
                    {
                        MAP_LOCATIONS.iter().enumerate().map(|(index, pin)| {
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(index))
                            };
                            html! {
                                <button
                                    key={pin.id}
                                    class={classes!("map-pin", (*selected == index).then(|| "active"))}
                                    style={format!("top: {}; left: {};", pin.top, pin.left)}
                                    title={pin.state_name}
                                    {onclick}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="map-detail">
                    <span class="map-tag">{location.tag}{" • "}{location.sdg}</span>
                    <h3>{location.state_name}</h3>
                    <h4>{location.project_title}</h4>
                    <p>{location.description}</p>
                    <a
                        href="#"
                        class="map-link"
                        onclick={nav_link(&navigate, NavRequest::detail(Page::ProjectDetail, location.id))}
                    >
                        {"View Project →"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(NewsSection)]
fn news_section() -> Html {
    let navigate = use_navigate();
    let active = use_state(|| 0usize);
    let rail = &ARTICLES[..NEWS_RAIL.min(ARTICLES.len())];
    let Some(article) = rail.get(*active) else {
        return html! {};
    };
    let open_active = nav_link(&navigate, NavRequest::detail(Page::NewsDetail, article.id.to_record_id()));

    html! {
        <section class="news-section">
            <div class="home-container">
                <div class="news-header">
                    <SectionHeader eyebrow="Insights" title="Latest from the field." />
                    <a href="#" class="news-all" onclick={nav_link(&navigate, NavRequest::to(Page::News))}>{"[ VIEW ALL ]"}</a>
                </div>
                <div class="news-layout">
                    <div class="news-feature" onclick={open_active.clone()}>
                        <img src={article.image} alt={article.title} />
                        <span class="news-category">{article.category}</span>
                    </div>
                    <div class="news-rail">
                        <p class="news-excerpt" onclick={open_active}>{article.excerpt}</p>
                        {
                            rail.iter().enumerate().map(|(index, item)| {
                                let select = {
                                    let active = active.clone();
                                    Callback::from(move |_: MouseEvent| active.set(index))
                                };
                                html! {
                                    <div key={index} class={classes!("news-row", (*active == index).then(|| "active"))} onclick={select}>
                                        <span class="news-date">{item.date}</span>
                                        <h4>{item.title}</h4>
                                        <a
                                            href="#"
                                            onclick={nav_link(&navigate, NavRequest::detail(Page::NewsDetail, item.id.to_record_id()))}
                                        >
                                            {"Read →"}
                                        </a>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ImpactSection)]
fn impact_section() -> Html {
    html! {
        <section class="impact-section">
            <div class="home-container impact-grid">
                <div class="impact-stat">
                    <div class="impact-value"><Counter target={500.0} suffix="+" /></div>
                    <span>{"Productive assets financed"}</span>
                </div>
                <div class="impact-stat">
                    <div class="impact-value"><Counter target={12500.0} /></div>
                    <span>{"Farmers reached"}</span>
                </div>
                <div class="impact-stat">
                    <div class="impact-value"><Counter target={40.0} suffix="%" /></div>
                    <span>{"Fewer post-harvest losses"}</span>
                </div>
                <div class="impact-stat">
                    <div class="impact-value"><Counter target={120.0} suffix="k" /></div>
                    <span>{"MWh of productive load"}</span>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    info!("Rendering home page");
    let navigate = use_navigate();

    html! {
        <div class="home-page">
            <Hero />
            <TrustBar />
            <HubSection />
            <MapSection />
            <ImpactSection />
            <NewsSection />
            <section class="cta-band">
                <h2>{"Ready to power productive growth?"}</h2>
                <button onclick={nav_link(&navigate, NavRequest::to(Page::Contact))}>{"Start a Conversation"}</button>
            </section>
            <style>
                {r#"
                .home-container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .trust-bar {
                    background: #062c20;
                    padding: 2rem 0;
                    overflow: hidden;
                }
                .trust-label {
                    text-align: center;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #a3d65c;
                }
                .trust-track {
                    display: flex;
                    gap: 4rem;
                    white-space: nowrap;
                    animation: trust-marquee 30s linear infinite;
                }
                @keyframes trust-marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-25%); }
                }
                .trust-name {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.4);
                }
                .hub-section,
                .news-section,
                .map-section {
                    padding: 8rem 0;
                }
                .hub-tabs {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .hub-tab {
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #e5e7eb;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hub-tab.active {
                    background: #062c20;
                    color: #fff;
                }
                .hub-tab-subtitle {
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #7cb342;
                }
                .hub-image {
                    width: 100%;
                    height: 420px;
                    object-fit: cover;
                    border-radius: 1rem;
                    margin-top: 2rem;
                }
                .map-section {
                    background: #062c20;
                    color: #fff;
                }
                .map-layout {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 4rem;
                }
                .map-canvas {
                    position: relative;
                    min-height: 480px;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                }
                .map-pin {
                    position: absolute;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 50%;
                    border: 2px solid #a3d65c;
                    background: transparent;
                    cursor: pointer;
                }
                .map-pin.active {
                    background: #a3d65c;
                    box-shadow: 0 0 0 8px rgba(163, 214, 92, 0.25);
                }
                .map-tag {
                    font-size: 0.75rem;
                    color: #a3d65c;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .map-link {
                    color: #a3d65c;
                    font-weight: 700;
                    text-decoration: none;
                }
                .impact-section {
                    padding: 6rem 0;
                    background: #f4f7ee;
                }
                .impact-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .impact-value {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #062c20;
                }
                .news-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                }
                .news-all {
                    font-family: monospace;
                    color: #9ca3af;
                    text-decoration: none;
                }
                .news-layout {
                    display: grid;
                    grid-template-columns: 1.3fr 1fr;
                    gap: 3rem;
                }
                .news-feature {
                    position: relative;
                    height: 520px;
                    border-radius: 0.7rem;
                    overflow: hidden;
                    cursor: pointer;
                }
                .news-feature img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .news-category {
                    position: absolute;
                    top: 1.5rem;
                    left: 1.5rem;
                    background: #a3d65c;
                    color: #062c20;
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .news-excerpt {
                    font-size: 1.4rem;
                    color: #6b7280;
                    cursor: pointer;
                }
                .news-row {
                    padding: 1.25rem 0;
                    border-top: 1px solid #e5e7eb;
                    cursor: pointer;
                    opacity: 0.5;
                }
                .news-row.active {
                    opacity: 1;
                }
                .news-row a {
                    color: #7cb342;
                    text-decoration: none;
                    font-size: 0.85rem;
                }
                .news-date {
                    font-size: 0.75rem;
                    color: #9ca3af;
                }
                .cta-band {
                    background: #a3d65c;
                    padding: 6rem 1.5rem;
                    text-align: center;
                }
                .cta-band h2 {
                    font-size: 3rem;
                    color: #062c20;
                }
                .cta-band button {
                    background: #062c20;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2.5rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .hub-tabs,
                    .impact-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .map-layout,
                    .news-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
