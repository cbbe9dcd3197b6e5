use log::info;
use yew::prelude::*;

use crate::config::SUBNAV_SCROLL_OFFSET;
use crate::content::legal::TEAM_SECTIONS;
use crate::content::team::{Person, BOARD, EXECUTIVES, MEMBERS};
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};
use crate::scroll_spy::use_scroll_spy;

fn group(section: &str) -> &'static [Person] {
    match section {
        "executive" => &EXECUTIVES,
        "board" => &BOARD,
        _ => &MEMBERS,
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    info!("Rendering team page");
    let navigate = use_navigate();
    let spy = use_scroll_spy(&TEAM_SECTIONS, SUBNAV_SCROLL_OFFSET);
    let selected = use_state(|| None::<&'static Person>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <div class="team-page">
            <section class="team-hero">
                <div class="breadcrumb">
                    <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                    {" / Team"}
                </div>
                <h1>{"The people behind the "}<span class="accent">{"assets."}</span></h1>
            </section>

            <div class="team-body">
                <aside class="team-nav">
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
                                    class={classes!("team-nav-item", spy.tracker.is_active(id).then(|| "active"))}
                                    {onclick}
                                >
                                    <span>{section.number}</span>{section.title}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </aside>

                <div class="team-groups">
                    {
                        TEAM_SECTIONS.iter().map(|section| html! {
                            <section id={section.id} key={section.id} class="team-group">
                                <h2>{section.title}</h2>
                                <div class="team-grid">
                                    {
                                        group(section.id).iter().map(|person| {
                                            let open = {
                                                let selected = selected.clone();
                                                Callback::from(move |_: MouseEvent| selected.set(Some(person)))
                                            };
                                            html! {
                                                <div key={person.name} class="team-card" onclick={open}>
                                                    <img src={person.image} alt={person.name} />
                                                    <h3>{person.name}</h3>
                                                    <span>{person.title}</span>
                                                </div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </section>
                        }).collect::<Html>()
                    }
                    <div class="team-join">
                        <h3>{"Want to build with us?"}</h3>
                        <button onclick={nav_link(&navigate, NavRequest::to(Page::Contact))}>{"Get in Touch"}</button>
                    </div>
                </div>
            </div>

            if let Some(person) = *selected {
                <div class="team-modal" onclick={close.clone()}>
                    <div class="team-modal-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="team-modal-close" onclick={close}>{"✕"}</button>
                        <img src={person.image} alt={person.name} />
                        <h3>{person.name}</h3>
                        <span>{person.title}</span>
                        <p>{person.bio}</p>
                    </div>
                </div>
            }
            <style>
                {r#"
                .team-page {
                    background: #fafaf7;
                }
                .team-hero {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 10rem 1.5rem 4rem;
                }
                .team-hero h1 {
                    font-size: 4.5rem;
                    color: #062c20;
                }
                .team-hero .accent {
                    color: #a3d65c;
                }
                .team-body {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                    display: grid;
                    grid-template-columns: 240px 1fr;
                    gap: 4rem;
                }
                .team-nav {
                    position: sticky;
                    top: 120px;
                    align-self: start;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .team-nav-item {
                    display: flex;
                    gap: 0.75rem;
                    padding: 0.6rem 1rem;
                    border-left: 2px solid transparent;
                    color: #6b7280;
                    text-decoration: none;
                }
                .team-nav-item span {
                    color: #a3d65c;
                }
                .team-nav-item.active {
                    border-left-color: #a3d65c;
                    color: #062c20;
                    font-weight: 600;
                }
                .team-group {
                    margin-bottom: 5rem;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .team-card {
                    cursor: pointer;
                }
                .team-card img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    border-radius: 0.7rem;
                    filter: grayscale(100%);
                    transition: filter 0.3s ease;
                }
                .team-card:hover img {
                    filter: none;
                }
                .team-card span,
                .team-modal-card span {
                    font-size: 0.8rem;
                    color: #7cb342;
                }
                .team-join button {
                    background: #062c20;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 2rem;
                    cursor: pointer;
                }
                .team-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 1002;
                    background: rgba(6, 44, 32, 0.8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .team-modal-card {
                    position: relative;
                    max-width: 480px;
                    background: #fff;
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }
                .team-modal-card img {
                    width: 100%;
                    border-radius: 1rem;
                }
                .team-modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .team-body {
                        grid-template-columns: 1fr;
                    }
                    .team-nav {
                        display: none;
                    }
                    .team-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
