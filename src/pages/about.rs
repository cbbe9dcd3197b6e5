use log::info;
use yew::prelude::*;

use crate::components::about_slider::AboutSlider;
use crate::components::counter::Counter;
use crate::components::section_header::SectionHeader;
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

const VALUES: [(&str, &str); 3] = [
    ("Mission", "To de-risk the adoption of productive machinery in rural markets, turning energy access into tangible economic output."),
    ("Vision", "A continent where every electron generated by a mini-grid is consumed by a machine that creates wealth for a community."),
    ("Access", "We believe ownership shouldn't be a barrier. Our model replaces high CapEx with manageable OpEx, aligned with harvest cycles."),
];

#[function_component(About)]
pub fn about() -> Html {
    info!("Rendering about page");
    let navigate = use_navigate();

    html! {
        <div class="about-page">
            <section class="about-intro">
                <div class="page-container">
                    <div class="breadcrumb">
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                        {" / About"}
                    </div>
                    <h1>{"Energy to "}<span class="accent">{"economy."}</span></h1>
                    <p class="about-lead">
                        {"AgAsset Co is a specialized asset vehicle dedicated to bridging the gap between energy access and productive use. We finance, deploy, and manage machinery at scale."}
                    </p>
                </div>
            </section>

            <AboutSlider />

            <section class="about-gap">
                <div class="page-container about-columns">
                    <SectionHeader eyebrow="The Gap" title="The missing link." />
                    <div>
                        <p>{"While developers build grids and farmers grow crops, a missing link remained: the capital-intensive machinery required to process harvest. We fill that void."}</p>
                        <p>{"Financing is easy. Keeping assets running in remote locations is hard. That is our core competency. We leverage real-time data to de-risk investments and maximize runtime."}</p>
                    </div>
                </div>
            </section>

            <section class="about-stats">
                <div class="page-container about-stat-grid">
                    <div><div class="about-stat-value"><Counter target={99.2} decimals={1} suffix="%" /></div><span>{"Fleet uptime"}</span></div>
                    <div><div class="about-stat-value"><Counter target={3.0} /></div><span>{"Operating clusters"}</span></div>
                    <div><div class="about-stat-value"><Counter target={2.0} /></div><span>{"Regional hubs"}</span></div>
                </div>
            </section>

            <section class="about-values">
                <div class="page-container">
                    <SectionHeader eyebrow="Core Values" title="What drives us." />
                    <div class="value-grid">
                        {
                            VALUES.iter().enumerate().map(|(i, (title, body))| html! {
                                <div key={*title} class="value-card">
                                    <span class="value-number">{format!("{:02}", i + 1)}</span>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="about-cta">
                <div class="page-container">
                    <p>{"By choosing renewable energy financing, you lower energy costs, reduce carbon emissions, and support innovative solutions that benefit our planet. Whether you are a mini-grid developer seeking utilization or an investor seeking impact, we have the vehicle to execute."}</p>
                    <div class="about-cta-actions">
                        <button onclick={nav_link(&navigate, NavRequest::to(Page::Team))}>{"Meet the Team"}</button>
                        <button class="primary" onclick={nav_link(&navigate, NavRequest::to(Page::Contact))}>{"Partner With Us"}</button>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .page-container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .breadcrumb {
                    font-size: 0.8rem;
                    color: #9ca3af;
                    margin-bottom: 2rem;
                }
                .breadcrumb a {
                    color: inherit;
                    text-decoration: none;
                }
                .about-intro {
                    padding: 10rem 0 6rem;
                }
                .about-intro h1 {
                    font-size: 5rem;
                    color: #062c20;
                    margin: 0;
                }
                .accent {
                    color: #a3d65c;
                }
                .about-lead {
                    max-width: 640px;
                    font-size: 1.3rem;
                    color: #6b7280;
                }
                .about-gap,
                .about-values,
                .about-cta {
                    padding: 8rem 0;
                }
                .about-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .about-stats {
                    background: #062c20;
                    color: #fff;
                    padding: 5rem 0;
                }
                .about-stat-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .about-stat-value {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #a3d65c;
                }
                .value-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .value-card {
                    padding: 2.5rem;
                    border-radius: 0.7rem;
                    background: #f4f7ee;
                }
                .value-number {
                    color: #7cb342;
                    font-family: monospace;
                }
                .about-cta-actions {
                    display: flex;
                    gap: 1rem;
                }
                .about-cta-actions button {
                    border: 1px solid #062c20;
                    background: transparent;
                    border-radius: 999px;
                    padding: 0.9rem 2rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .about-cta-actions button.primary {
                    background: #062c20;
                    color: #fff;
                }
                @media (max-width: 1024px) {
                    .about-columns,
                    .about-stat-grid,
                    .value-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
