use log::info;
use yew::prelude::*;

use crate::components::accordion::{toggle_row, AccordionItem};
use crate::components::section_header::SectionHeader;
use crate::content::solutions::{ASSET_CLASSES, FAQS, SOLUTIONS};
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

const LIFECYCLE: [(&str, &str); 4] = [
    ("Origination", "Credit vetting with agricultural yield data and site energy audits."),
    ("Deployment", "Procurement, installation and commissioning by certified technicians."),
    ("Monitoring", "IoT telemetry on runtime, load and location, reviewed daily."),
    ("Servicing", "Spare parts and rapid response crews from the nearest hub."),
];

#[function_component(Solutions)]
pub fn solutions() -> Html {
    info!("Rendering solutions page");
    let navigate = use_navigate();
    let open_faq = use_state(|| None::<usize>);

    html! {
        <div class="solutions-page">
            <section class="solutions-hero">
                <div class="breadcrumb">
                    <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                    {" / Solutions"}
                </div>
                <h1>{"Machinery that "}<span class="accent">{"pays for itself."}</span></h1>
                <p>{"We finance, deploy and maintain the productive assets that turn rural electricity into income."}</p>
            </section>

            <section class="solutions-offer">
                <SectionHeader eyebrow="Offering" title="Four ways we de-risk productive use." />
                <div class="offer-grid">
                    {
                        SOLUTIONS.iter().map(|solution| html! {
                            <div key={solution.title} class="offer-card">
                                <span>{solution.subtitle}</span>
                                <h3>{solution.title}</h3>
                                <p>{solution.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="solutions-assets">
                <SectionHeader eyebrow="Asset Classes" title="Built for high-load, high-yield use." dark=true />
                <div class="asset-grid">
                    {
                        ASSET_CLASSES.iter().map(|asset| html! {
                            <div key={asset.name} class="asset-card">
                                <h3>{asset.name}</h3>
                                <span class="asset-load">{asset.load}</span>
                                <p>{asset.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="solutions-lifecycle">
                <SectionHeader eyebrow="Lifecycle" title="From feasibility to final repayment." />
                <ol class="lifecycle-steps">
                    {
                        LIFECYCLE.iter().map(|(title, desc)| html! {
                            <li key={*title}><h4>{*title}</h4><p>{*desc}</p></li>
                        }).collect::<Html>()
                    }
                </ol>
            </section>

            <section class="solutions-faq">
                <SectionHeader eyebrow="FAQ" title="Questions we hear often." />
                {
                    FAQS.iter().enumerate().map(|(index, faq)| {
                        let on_toggle = {
                            let open_faq = open_faq.clone();
                            Callback::from(move |_: ()| open_faq.set(toggle_row(*open_faq, index)))
                        };
                        html! {
                            <AccordionItem key={index} title={faq.question} is_open={*open_faq == Some(index)} {on_toggle}>
                                <p>{faq.answer}</p>
                            </AccordionItem>
                        }
                    }).collect::<Html>()
                }
            </section>

            <section class="solutions-cta">
                <h2>{"Have a site in mind?"}</h2>
                <button onclick={nav_link(&navigate, NavRequest::to(Page::Contact))}>{"Request an Assessment"}</button>
            </section>
            <style>
                {r#"
                .solutions-page > section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .solutions-hero {
                    padding-top: 10rem !important;
                }
                .solutions-hero h1 {
                    font-size: 4.5rem;
                    color: #062c20;
                }
                .solutions-hero .accent {
                    color: #a3d65c;
                }
                .offer-grid,
                .asset-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .offer-card {
                    padding: 2rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.7rem;
                }
                .offer-card span,
                .asset-load {
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #7cb342;
                }
                .solutions-page > .solutions-assets {
                    max-width: none;
                    background: #062c20;
                    color: #fff;
                }
                .asset-card {
                    padding: 2rem;
                    border-radius: 0.7rem;
                    background: rgba(255, 255, 255, 0.05);
                }
                .lifecycle-steps {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    padding: 0;
                    list-style: none;
                    counter-reset: step;
                }
                .lifecycle-steps li::before {
                    counter-increment: step;
                    content: "0" counter(step);
                    color: #a3d65c;
                    font-family: monospace;
                }
                .solutions-cta {
                    text-align: center;
                }
                .solutions-cta button {
                    background: #062c20;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2.5rem;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .offer-grid,
                    .asset-grid,
                    .lifecycle-steps {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
