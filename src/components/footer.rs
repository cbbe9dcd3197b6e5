use yew::prelude::*;

use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

/// Pages listed under "Company": everything except home, detail views and
/// the legal documents, which have their own row.
fn company_pages() -> impl Iterator<Item = Page> {
    Page::ALL.into_iter().filter(|page| {
        !page.is_detail() && !matches!(page, Page::Home | Page::Terms | Page::Privacy | Page::CookiePolicy)
    })
}

const SERVICES: [&str; 4] = ["Lease-to-Own", "PUE Financing", "Asset Management", "Developer Portal"];
const SOCIAL: [&str; 3] = ["LinkedIn", "Twitter / X", "Medium"];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_navigate();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-columns">
                    <div class="footer-brand">
                        <a href="#" class="footer-logo" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>
                            {"AgAsset"}<span class="accent">{"Co"}</span>
                        </a>
                        <p>{"A wholly owned subsidiary of "}<strong>{"Agronomie"}</strong>{"."}</p>
                        <div class="footer-offices">{"Lagos • Nairobi"}</div>
                    </div>
                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <ul>
                            {
                                company_pages().map(|page| html! {
                                    <li key={page.slug()}>
                                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(page))}>{page.label()}</a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Services"}</h4>
                        <ul>
                            {
                                SERVICES.iter().map(|name| html! {
                                    <li key={*name}>
                                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Solutions))}>{*name}</a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Connect"}</h4>
                        <ul>
                            { for SOCIAL.iter().map(|name| html! { <li key={*name}><span>{*name}{" ↗"}</span></li> }) }
                        </ul>
                    </div>
                </div>
                <div class="footer-legal">
                    <span>{"© 2025 AgAsset Co. All rights reserved."}</span>
                    <div class="legal-links">
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Privacy))}>{"Privacy Policy"}</a>
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Terms))}>{"Terms"}</a>
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::CookiePolicy))}>{"Cookie Policy"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #fff;
                    color: #062c20;
                    padding: 6rem 0 2rem;
                    border-top: 1px solid #e5e7eb;
                }
                .footer-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    margin-bottom: 6rem;
                }
                .footer-logo {
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #062c20;
                    text-decoration: none;
                }
                .footer-logo .accent {
                    color: #a3d65c;
                }
                .footer-brand p {
                    color: #9ca3af;
                    font-size: 0.9rem;
                }
                .footer-offices {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #d1d5db;
                }
                .footer-column h4 {
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #9ca3af;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .footer-column a,
                .legal-links a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-column a:hover,
                .legal-links a:hover {
                    color: #7cb342;
                }
                .footer-legal {
                    display: flex;
                    justify-content: space-between;
                    border-top: 1px solid #e5e7eb;
                    padding-top: 2rem;
                    font-size: 0.8rem;
                    color: #9ca3af;
                }
                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }
                @media (max-width: 768px) {
                    .footer-columns {
                        grid-template-columns: 1fr;
                    }
                    .footer-legal {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
