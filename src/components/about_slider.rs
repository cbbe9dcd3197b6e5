use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::SlideCursor;
use crate::config::ABOUT_SLIDER_PERIOD_MS;
use crate::content::solutions::ABOUT_SLIDES;

const BACKGROUND: &str = "https://images.unsplash.com/photo-1500382017468-9049fed747ef?q=80&w=2832&auto=format&fit=crop";

#[function_component(AboutSlider)]
pub fn about_slider() -> Html {
    let cursor = use_state(|| SlideCursor::new(ABOUT_SLIDES.len()));

    {
        let cursor = cursor.clone();
        use_interval(move || cursor.set(cursor.next()), ABOUT_SLIDER_PERIOD_MS);
    }

    let Some(slide) = ABOUT_SLIDES.get(cursor.index()) else {
        return html! {};
    };

    let select = |index: usize| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.select(index)))
    };
    let prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.prev()))
    };
    let next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };

    html! {
        <section class="about-slider" style={format!("background-image: url('{}')", BACKGROUND)}>
            <div class="slider-overlay"></div>
            <div class="slider-content">
                <span class="slider-kicker">{slide.kicker}</span>
                <h2 class="slider-title">{slide.title}</h2>
                <p class="slider-desc">{slide.desc}</p>
                <div class="slider-controls">
                    <button class="slider-arrow" onclick={prev}>{"←"}</button>
                    {
                        (0..ABOUT_SLIDES.len()).map(|index| html! {
                            <button
                                key={index}
                                class={classes!("slider-dot", (index == cursor.index()).then(|| "active"))}
                                onclick={select(index)}
                            />
                        }).collect::<Html>()
                    }
                    <button class="slider-arrow" onclick={next}>{"→"}</button>
                </div>
            </div>
            <style>
                {r#"
                .about-slider {
                    position: relative;
                    min-height: 80vh;
                    background-size: cover;
                    background-position: center;
                    display: flex;
                    align-items: flex-end;
                }
                .slider-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #062c20 10%, rgba(6, 44, 32, 0.3));
                }
                .slider-content {
                    position: relative;
                    max-width: 1280px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    color: #fff;
                }
                .slider-kicker {
                    font-size: 0.8rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #a3d65c;
                }
                .slider-title {
                    font-size: 6rem;
                    margin: 1rem 0;
                }
                .slider-desc {
                    max-width: 520px;
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .slider-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .slider-dot {
                    width: 2rem;
                    height: 4px;
                    border: none;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .slider-dot.active {
                    background: #a3d65c;
                }
                .slider-arrow {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
