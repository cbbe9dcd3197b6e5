use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::NAV_SCROLLED_THRESHOLD;
use crate::navigation::{use_view, NavRequest, Page};

const PRIMARY_LINKS: [Page; 4] = [Page::Home, Page::Solutions, Page::Portfolio, Page::News];
const COMPANY_LINKS: [(Page, &str); 2] = [
    (Page::About, "Our mandate, history and approach"),
    (Page::Team, "Leadership, board and field teams"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let view = use_view();
    let menu_open = use_state(|| false);
    let company_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > NAV_SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Every link closes the menus before navigating.
    let go = {
        let navigate = view.navigate.clone();
        let menu_open = menu_open.clone();
        let company_open = company_open.clone();
        move |page: Page| {
            let navigate = navigate.clone();
            let menu_open = menu_open.clone();
            let company_open = company_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                company_open.set(false);
                navigate.emit(NavRequest::to(page));
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_company = {
        let company_open = company_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            company_open.set(!*company_open);
        })
    };

    // Only the home hero sits under a transparent bar.
    let light_mode = *is_scrolled || view.current_page != Page::Home;
    let company_active = matches!(view.current_page, Page::About | Page::Team);

    html! {
        <nav class={classes!("top-nav", light_mode.then(|| "light"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go(Page::Home)}>
                    {"AgAsset"}<span class="accent">{"Co"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    {
                        PRIMARY_LINKS.iter().map(|page| html! {
                            <a
                                href="#"
                                key={page.slug()}
                                class={classes!("nav-link", (view.current_page == *page).then(|| "active"))}
                                onclick={go(*page)}
                            >
                                {page.label()}
                            </a>
                        }).collect::<Html>()
                    }
                    <div class={classes!("nav-mega", (*company_open).then(|| "open"))}>
                        <button
                            class={classes!("nav-link", company_active.then(|| "active"))}
                            onclick={toggle_company}
                        >
                            {"Company"}
                        </button>
                        if *company_open {
                            <div class="mega-panel">
                                {
                                    COMPANY_LINKS.iter().map(|(page, blurb)| html! {
                                        <a href="#" key={page.slug()} class="mega-item" onclick={go(*page)}>
                                            <strong>{page.label()}</strong>
                                            <span>{*blurb}</span>
                                        </a>
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    </div>
                    <a href="#" class="nav-cta" onclick={go(Page::Contact)}>
                        {"Get in Touch"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 999;
                    padding: 1.5rem;
                    transition: all 0.5s ease;
                    background: rgba(6, 44, 32, 0.2);
                    backdrop-filter: blur(4px);
                }
                .top-nav.light {
                    padding: 0.75rem 1.5rem;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .top-nav.light .nav-logo,
                .top-nav.light .nav-link {
                    color: #062c20;
                }
                .nav-logo .accent,
                .nav-link.active {
                    color: #a3d65c;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #fff;
                    text-decoration: none;
                    font-size: 0.9rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-mega {
                    position: relative;
                }
                .mega-panel {
                    position: absolute;
                    top: 2.5rem;
                    left: -1rem;
                    width: 280px;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.15);
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .mega-item {
                    display: flex;
                    flex-direction: column;
                    text-decoration: none;
                    color: #062c20;
                }
                .mega-item span {
                    font-size: 0.8rem;
                    color: #6b7280;
                }
                .nav-cta {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    background: #a3d65c;
                    color: #062c20;
                    font-weight: 700;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                }
                @media (max-width: 1024px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: #fff;
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
