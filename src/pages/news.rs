use log::info;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::SlideCursor;
use crate::config::NEWS_CAROUSEL_PERIOD_MS;
use crate::content::articles::{ARTICLES, FEATURED};
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

#[function_component(News)]
pub fn news() -> Html {
    info!("Rendering news page");
    let navigate = use_navigate();
    let cursor = use_state(|| SlideCursor::new(FEATURED.len()));

    {
        let cursor = cursor.clone();
        use_interval(move || cursor.set(cursor.next()), NEWS_CAROUSEL_PERIOD_MS);
    }

    let current = FEATURED.get(cursor.index());

    html! {
        <div class="news-page">
            <section class="news-hero">
                <div class="news-meta">
                    <div class="breadcrumb">
                        <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                        {" / Insights"}
                    </div>
                    <span>{format!("{:02} Articles & Insights • 2025", ARTICLES.len())}</span>
                </div>
                <h1>{"News & "}<span class="accent">{"Insights."}</span></h1>

                if let Some(slide) = current {
                    <div
                        class="featured-banner"
                        onclick={nav_link(&navigate, NavRequest::detail(Page::NewsDetail, slide.article.to_record_id()))}
                    >
                        <img key={cursor.index()} src={slide.image} alt="Featured News" />
                        <div class="featured-progress" key={format!("progress-{}", cursor.index())}></div>
                    </div>
                }

                <div class="featured-list">
                    {
                        FEATURED.iter().enumerate().map(|(index, slide)| {
                            let hover = {
                                let cursor = cursor.clone();
                                Callback::from(move |_: MouseEvent| cursor.set(cursor.select(index)))
                            };
                            html! {
                                <div
                                    key={index}
                                    class={classes!("featured-item", (cursor.index() == index).then(|| "active"))}
                                    onmouseenter={hover}
                                    onclick={nav_link(&navigate, NavRequest::detail(Page::NewsDetail, slide.article.to_record_id()))}
                                >
                                    <span class="featured-category">{slide.category}{" • "}{slide.date}</span>
                                    <h4>{slide.title}</h4>
                                    if cursor.index() == index {
                                        <p>{slide.excerpt}</p>
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="news-archive">
                <h2>{"All Articles"}</h2>
                <div class="article-grid">
                    {
                        ARTICLES.iter().map(|article| html! {
                            <div
                                key={article.id.to_record_id().to_string()}
                                class="article-card"
                                onclick={nav_link(&navigate, NavRequest::detail(Page::NewsDetail, article.id.to_record_id()))}
                            >
                                <img src={article.image} alt={article.title} />
                                <span class="article-category">{article.category}{" • "}{article.date}</span>
                                <h3>{article.title}</h3>
                                <p>{article.excerpt}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <style>
                {format!(r#"
                .news-page > section {{
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }}
                .news-hero {{
                    padding-top: 10rem !important;
                }}
                .news-meta {{
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.8rem;
                    color: #9ca3af;
                }}
                .news-hero h1 {{
                    font-size: 4.5rem;
                    color: #062c20;
                }}
                .news-hero .accent {{
                    color: #a3d65c;
                }}
                .featured-banner {{
                    position: relative;
                    height: 520px;
                    border-radius: 0.7rem;
                    overflow: hidden;
                    cursor: pointer;
                }}
                .featured-banner img {{
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: featured-fade 1.2s ease-in-out;
                }}
                @keyframes featured-fade {{
                    from {{ opacity: 0; transform: scale(1.05); }}
                    to {{ opacity: 1; transform: scale(1); }}
                }}
                .featured-progress {{
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 3px;
                    background: #a3d65c;
                    animation: featured-progress {period}ms linear;
                }}
                @keyframes featured-progress {{
                    from {{ width: 0%; }}
                    to {{ width: 100%; }}
                }}
                .featured-list {{
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                }}
                .featured-item {{
                    border-top: 2px solid #e5e7eb;
                    padding-top: 1rem;
                    cursor: pointer;
                }}
                .featured-item.active {{
                    border-top-color: #a3d65c;
                }}
                .featured-category,
                .article-category {{
                    font-size: 0.75rem;
                    color: #7cb342;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }}
                .article-grid {{
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }}
                .article-card {{
                    cursor: pointer;
                }}
                .article-card img {{
                    width: 100%;
                    height: 240px;
                    object-fit: cover;
                    border-radius: 0.7rem;
                }}
                @media (max-width: 1024px) {{
                    .featured-list,
                    .article-grid {{
                        grid-template-columns: 1fr;
                    }}
                }}
                "#, period = NEWS_CAROUSEL_PERIOD_MS)}
            </style>
        </div>
    }
}
