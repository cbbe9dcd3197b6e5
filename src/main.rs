use log::info;
use yew::prelude::*;

mod api;
mod carousel;
mod chat;
mod config;
mod consent;
mod navigation;
mod records;
mod scroll_spy;
mod content {
    pub mod articles;
    pub mod legal;
    pub mod projects;
    pub mod solutions;
    pub mod team;
}
mod components {
    pub mod about_slider;
    pub mod accordion;
    pub mod assistant;
    pub mod cookie_consent;
    pub mod counter;
    pub mod footer;
    pub mod hero;
    pub mod legal_layout;
    pub mod nav;
    pub mod section_header;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod cookie_policy;
    pub mod home;
    pub mod news;
    pub mod news_detail;
    pub mod portfolio;
    pub mod privacy;
    pub mod project_detail;
    pub mod solutions;
    pub mod team;
    pub mod terms;
}

use components::{assistant::AssistantWidget, cookie_consent::CookieConsent, footer::Footer, nav::Nav};
use navigation::{scroll_to_top, NavRequest, Page, RecordId, ViewContext, ViewSelection};
use pages::{
    about::About,
    contact::Contact,
    cookie_policy::CookiePolicy,
    home::Home,
    news::News,
    news_detail::NewsDetail,
    portfolio::Portfolio,
    privacy::Privacy,
    project_detail::ProjectDetail,
    solutions::Solutions,
    team::Team,
    terms::Terms,
};

fn switch(page: Page, record: Option<RecordId>) -> Html {
    match page {
        Page::Home => html! { <Home /> },
        Page::About => html! { <About /> },
        Page::Team => html! { <Team /> },
        Page::Solutions => html! { <Solutions /> },
        Page::Portfolio => html! { <Portfolio /> },
        Page::News => html! { <News /> },
        Page::NewsDetail => html! { <NewsDetail {record} /> },
        Page::ProjectDetail => html! { <ProjectDetail {record} /> },
        Page::Contact => html! { <Contact /> },
        Page::Terms => html! { <Terms /> },
        Page::Privacy => html! { <Privacy /> },
        Page::CookiePolicy => html! { <CookiePolicy /> },
    }
}

#[function_component]
fn App() -> Html {
    let selection = use_reducer(ViewSelection::default);

    let navigate = use_memo(
        |dispatcher| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |request: NavRequest| dispatcher.dispatch(request))
        },
        selection.dispatcher(),
    );

    // Every navigation starts at the top, including re-selecting the current page.
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        selection.generation,
    );

    let context = ViewContext::new(&selection, (*navigate).clone());

    html! {
        <ContextProvider<ViewContext> {context}>
            <Nav />
            <main>
                { switch(selection.current_page, selection.active_record_id.clone()) }
            </main>
            <Footer />
            <CookieConsent />
            <AssistantWidget />
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    color: #062c20;
                    background: #fff;
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
                .breadcrumb a:hover {
                    color: #7cb342;
                }
                "#}
            </style>
        </ContextProvider<ViewContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("Failed to initialise logging:", e.to_string());
    }

    info!("Starting AgAsset site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::consent::{ConsentError, ConsentGate, ConsentStore};
    use crate::content::articles::ARTICLES;
    use crate::navigation::{NavRequest, Page, RecordId, ViewSelection};
    use crate::records::resolve;

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<Option<String>>>);

    impl ConsentStore for SharedStore {
        fn read(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn write(&self, value: &str) -> Result<(), ConsentError> {
            *self.0.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn first_visit_accept_then_open_article_two() {
        let storage = SharedStore::default();

        let mut view = ViewSelection::default();
        assert_eq!(view.current_page, Page::Home);

        let mut banner = ConsentGate::mount(storage.clone());
        assert!(banner.needs_reveal());
        banner.reveal();
        assert!(banner.is_visible());
        banner.accept().unwrap();
        assert!(!banner.is_visible());

        let mut reloaded = ConsentGate::mount(storage.clone());
        reloaded.reveal();
        assert!(!reloaded.is_visible());

        view.navigate(NavRequest::detail(Page::NewsDetail, 2_i64));
        assert_eq!(view.current_page, Page::NewsDetail);
        assert_eq!(view.active_record_id, Some(RecordId::Number(2)));

        let article = resolve(&ARTICLES, view.active_record_id.as_ref()).unwrap();
        assert!(!article.is_fallback());
        assert_eq!(article.record().title, "Kenya Expansion Plans Finalized");
    }
}
