use log::{debug, info, warn};
use yew::prelude::*;

use crate::content::articles::ARTICLES;
use crate::navigation::{nav_link, use_navigate, NavRequest, Page, RecordId};
use crate::records::resolve;

#[derive(Properties, PartialEq)]
pub struct NewsDetailProps {
    pub record: Option<RecordId>,
}

#[function_component(NewsDetail)]
pub fn news_detail(props: &NewsDetailProps) -> Html {
    info!("Rendering news detail page");
    let navigate = use_navigate();

    let Some(resolution) = resolve(&ARTICLES, props.record.as_ref()) else {
        warn!("No articles to show");
        return html! {};
    };
    if resolution.is_fallback() {
        debug!("No article for {:?}, showing the first one", props.record);
    }
    let article = resolution.record();
    let related = ARTICLES.iter().filter(|a| a.id != article.id).take(2);

    html! {
        <div class="article-page">
            <header class="article-hero">
                <div class="breadcrumb">
                    <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::Home))}>{"Home"}</a>
                    {" / "}
                    <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::News))}>{"Insights"}</a>
                    {" / "}{article.category}
                </div>
                <span class="article-meta">{article.category}{" • "}{article.date}</span>
                <h1>{article.title}</h1>
                <img src={article.image} alt={article.title} />
            </header>

            <article class="article-body">
                <p class="article-lead">{article.excerpt}</p>
                { for article.body.iter().map(|p| html! { <p>{*p}</p> }) }
                <blockquote>
                    <p>{article.quote}</p>
                    <cite>{article.author}</cite>
                </blockquote>
                <h2>{article.sub_title}</h2>
                <p>{article.sub_content}</p>
                <h2>{"Looking Ahead"}</h2>
                <p>{article.looking_ahead}</p>
            </article>

            <section class="article-related">
                <h3>{"Related Insights"}</h3>
                <div class="related-grid">
                    {
                        related.map(|other| html! {
                            <div
                                key={other.id.to_record_id().to_string()}
                                class="related-card"
                                onclick={nav_link(&navigate, NavRequest::detail(Page::NewsDetail, other.id.to_record_id()))}
                            >
                                <span>{other.date}</span>
                                <h4>{other.title}</h4>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <a href="#" class="article-back" onclick={nav_link(&navigate, NavRequest::to(Page::News))}>{"← Back to all insights"}</a>
            </section>
            <style>
                {r#"
                .article-page {
                    padding-top: 9rem;
                }
                .article-hero,
                .article-related {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .article-meta {
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #7cb342;
                }
                .article-hero h1 {
                    font-size: 3.5rem;
                    color: #062c20;
                }
                .article-hero img {
                    width: 100%;
                    height: 520px;
                    object-fit: cover;
                    border-radius: 0.7rem;
                }
                .article-body {
                    max-width: 720px;
                    margin: 4rem auto;
                    padding: 0 1.5rem;
                    color: #374151;
                    line-height: 1.8;
                    font-size: 1.1rem;
                }
                .article-lead {
                    font-size: 1.4rem;
                    color: #062c20;
                }
                .article-body blockquote {
                    border-left: 3px solid #a3d65c;
                    margin: 3rem 0;
                    padding-left: 2rem;
                    font-size: 1.5rem;
                    color: #062c20;
                }
                .article-body cite {
                    display: block;
                    font-size: 0.85rem;
                    color: #9ca3af;
                }
                .related-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .related-card {
                    padding: 2rem;
                    border-radius: 0.7rem;
                    background: #f4f7ee;
                    cursor: pointer;
                }
                .article-back {
                    display: inline-block;
                    margin: 3rem 0 6rem;
                    color: #062c20;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}
