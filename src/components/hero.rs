use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::counter::Counter;
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

const VIDEO_SRC: &str = "https://videos.pexels.com/video-files/30583911/13097057_2560_1440_30fps.mp4";
const POSTER: &str = "https://images.pexels.com/photos/11679511/pexels-photo-11679511.jpeg";

/// Starts muted playback. Browsers may refuse autoplay; that only costs the
/// background animation, so the rejection is logged and dropped.
fn start_playback(video: &HtmlVideoElement) {
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("Autoplay prevented by browser policy: {:?}", e);
            }
        }),
        Err(e) => warn!("Failed to start hero video: {:?}", e),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigate = use_navigate();
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    start_playback(&video);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero-background">
                <video ref={video_ref} autoplay=true loop=true muted=true playsinline=true poster={POSTER}>
                    <source src={VIDEO_SRC} type="video/mp4" />
                </video>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {"Productive Use"}<br />
                    {"of "}<span class="accent">{"Energy Financing."}</span>
                </h1>
                <div class="hero-bottom">
                    <div class="hero-pitch">
                        <p>{"We bridge the gap between solar mini-grids and rural economic growth, turning energy access into income generation."}</p>
                        <button class="hero-cta" onclick={nav_link(&navigate, NavRequest::to(Page::Contact))}>
                            {"Partner With Us"}
                        </button>
                    </div>
                    <div class="hero-stats">
                        <div class="hero-stat">
                            <div class="hero-stat-value"><Counter target={500.0} suffix="+" /></div>
                            <div class="hero-stat-label">{"Active Assets"}</div>
                        </div>
                        <div class="hero-stat">
                            <div class="hero-stat-value"><Counter target={120.0} suffix="k+" /></div>
                            <div class="hero-stat-label">{"MWh Consumed"}</div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                    background: #062c20;
                }
                .hero-background video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), #062c20);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    height: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    color: #fff;
                }
                .hero-title {
                    font-size: clamp(3.5rem, 9vw, 8rem);
                    line-height: 1.05;
                    margin: auto 0;
                }
                .hero-title .accent {
                    color: #a3d65c;
                }
                .hero-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 2rem;
                }
                .hero-pitch {
                    max-width: 28rem;
                }
                .hero-cta {
                    background: #fff;
                    color: #062c20;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    cursor: pointer;
                }
                .hero-stats {
                    display: flex;
                    gap: 4rem;
                }
                .hero-stat-value {
                    font-size: 3.5rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                }
                .hero-stat-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #a3d65c;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }
                @media (max-width: 768px) {
                    .hero-bottom {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </section>
    }
}
