use log::info;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

const CHANNELS: [(&str, &str, &str); 3] = [
    ("General Inquiry", "info@agassetco.com", "General correspondence and partnership inquiries. We aim to respond within 24 business hours."),
    ("Lagos Office", "Victoria Island, Lagos", "Our central headquarters in Nigeria. Visit us for technical onboarding and strategic planning."),
    ("Field Support", "+234 (0) 800 AGASSET", "Dedicated line for active partners and field operations support."),
];

const ROLES: [(&str, &str); 4] = [
    ("developer", "Mini-Grid Developer"),
    ("investor", "Institutional Investor"),
    ("vendor", "Equipment Vendor"),
    ("other", "Other"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    info!("Rendering contact page");
    let navigate = use_navigate();

    // Presentational only; nothing is submitted anywhere.
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <div class="breadcrumb">
                    <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                    {" / Contact"}
                </div>
                <span class="contact-kicker">{"Corporate Communication & Inquiry"}</span>
                <h1>{"Connect with "}<span class="accent">{"AgAsset."}</span></h1>
                <p>{"Whether you are a Mini-Grid Developer, Investor, or Equipment Vendor, we are ready to deploy capital and technology where it matters most."}</p>
            </section>

            <section class="contact-channels">
                <SectionHeader eyebrow="Channels" title="Direct Connectivity." />
                <div class="channel-grid">
                    {
                        CHANNELS.iter().map(|(title, line, desc)| html! {
                            <div key={*title} class="channel-card">
                                <h3>{*title}</h3>
                                <strong>{*line}</strong>
                                <p>{*desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="contact-form-section">
                <SectionHeader eyebrow="Inquiry" title="Formal Request." />
                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <input type="text" placeholder="Full Name" />
                        <input type="text" placeholder="Company Name" />
                    </div>
                    <div class="form-row">
                        <input type="email" placeholder="Work Email" />
                        <select>
                            <option value="" disabled=true selected=true>{"Your Role"}</option>
                            { for ROLES.iter().map(|(value, label)| html! { <option key={*value} value={*value}>{*label}</option> }) }
                        </select>
                    </div>
                    <textarea rows="4" placeholder="Message / Brief"></textarea>
                    <button type="submit">{"Submit Inquiry"}</button>
                </form>
            </section>
            <style>
                {r#"
                .contact-page > section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .contact-hero {
                    padding-top: 10rem !important;
                }
                .contact-kicker {
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #7cb342;
                }
                .contact-hero h1 {
                    font-size: 4.5rem;
                    color: #062c20;
                }
                .contact-hero .accent {
                    color: #a3d65c;
                }
                .channel-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .channel-card {
                    padding: 2.5rem;
                    border-radius: 0.7rem;
                    background: #f4f7ee;
                }
                .channel-card:first-child {
                    background: #062c20;
                    color: #fff;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    max-width: 820px;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid #d1d5db;
                    padding: 1rem 0;
                    font-size: 1rem;
                }
                .contact-form button {
                    align-self: flex-start;
                    background: #062c20;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2.5rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .channel-grid,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
