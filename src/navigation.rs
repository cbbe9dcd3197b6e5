use std::fmt;
use std::rc::Rc;

use log::info;
use yew::prelude::*;

/// Every top-level view the site can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Team,
    Solutions,
    Portfolio,
    News,
    NewsDetail,
    ProjectDetail,
    Contact,
    Terms,
    Privacy,
    CookiePolicy,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Home,
        Page::About,
        Page::Team,
        Page::Solutions,
        Page::Portfolio,
        Page::News,
        Page::NewsDetail,
        Page::ProjectDetail,
        Page::Contact,
        Page::Terms,
        Page::Privacy,
        Page::CookiePolicy,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Team => "team",
            Page::Solutions => "solutions",
            Page::Portfolio => "portfolio",
            Page::News => "news",
            Page::NewsDetail => "news-detail",
            Page::ProjectDetail => "project-detail",
            Page::Contact => "contact",
            Page::Terms => "terms",
            Page::Privacy => "privacy",
            Page::CookiePolicy => "cookie-policy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Team => "Our Team",
            Page::Solutions => "Solutions",
            Page::Portfolio => "Portfolio",
            Page::News => "News",
            Page::NewsDetail => "Article",
            Page::ProjectDetail => "Project",
            Page::Contact => "Contact",
            Page::Terms => "Terms & Conditions",
            Page::Privacy => "Privacy Policy",
            Page::CookiePolicy => "Cookie Policy",
        }
    }

    /// Detail pages render the record named by `active_record_id`.
    pub fn is_detail(self) -> bool {
        matches!(self, Page::NewsDetail | Page::ProjectDetail)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Identifier of a detail record. Numbers and text never compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// A navigation intent emitted by any component below the root.
#[derive(Clone, Debug, PartialEq)]
pub struct NavRequest {
    pub page: Page,
    pub record: Option<RecordId>,
}

impl NavRequest {
    pub fn to(page: Page) -> Self {
        Self { page, record: None }
    }

    pub fn detail(page: Page, id: impl Into<RecordId>) -> Self {
        Self {
            page,
            record: Some(id.into()),
        }
    }
}

/// Root-owned selection state.
///
/// `active_record_id` is only ever replaced by a request that carries an id;
/// moving to a page without one leaves the last id in place.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ViewSelection {
    pub current_page: Page,
    pub active_record_id: Option<RecordId>,
    /// Bumped on every navigation so the root can scroll to top even when
    /// the page itself did not change.
    pub generation: u64,
}

impl ViewSelection {
    pub fn navigate(&mut self, request: NavRequest) {
        info!(
            "Navigating to {} (record: {})",
            request.page,
            request
                .record
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        self.current_page = request.page;
        if let Some(id) = request.record {
            self.active_record_id = Some(id);
        }
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Reducible for ViewSelection {
    type Action = NavRequest;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.navigate(action);
        Rc::new(next)
    }
}

/// Handed down through a `ContextProvider` so every consumer sees the same
/// selection and the same `navigate` entry point.
#[derive(Clone, PartialEq)]
pub struct ViewContext {
    pub current_page: Page,
    pub active_record_id: Option<RecordId>,
    pub navigate: Callback<NavRequest>,
}

impl ViewContext {
    pub fn new(selection: &ViewSelection, navigate: Callback<NavRequest>) -> Self {
        Self {
            current_page: selection.current_page,
            active_record_id: selection.active_record_id.clone(),
            navigate,
        }
    }
}

#[hook]
pub fn use_view() -> ViewContext {
    match use_context::<ViewContext>() {
        Some(ctx) => ctx,
        None => {
            gloo_console::error!("ViewContext missing, navigation disabled");
            ViewContext {
                current_page: Page::Home,
                active_record_id: None,
                navigate: Callback::noop(),
            }
        }
    }
}

/// Convenience for leaves that only emit navigation intents.
#[hook]
pub fn use_navigate() -> Callback<NavRequest> {
    use_view().navigate
}

/// Click handler that prevents the default anchor behaviour and navigates.
pub fn nav_link(navigate: &Callback<NavRequest>, request: NavRequest) -> Callback<MouseEvent> {
    let navigate = navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(request.clone());
    })
}

/// Scrolls the window to the top. Used after every page transition.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_without_record() {
        let selection = ViewSelection::default();
        assert_eq!(selection.current_page, Page::Home);
        assert_eq!(selection.active_record_id, None);
        assert_eq!(selection.generation, 0);
    }

    #[test]
    fn navigating_home_repeatedly_keeps_record() {
        let mut selection = ViewSelection::default();
        selection.navigate(NavRequest::detail(Page::NewsDetail, 3_i64));
        for _ in 0..5 {
            selection.navigate(NavRequest::to(Page::Home));
            assert_eq!(selection.current_page, Page::Home);
            assert_eq!(selection.active_record_id, Some(RecordId::Number(3)));
        }
    }

    #[test]
    fn id_is_overwritten_only_when_supplied() {
        let mut selection = ViewSelection::default();
        selection.navigate(NavRequest::detail(Page::ProjectDetail, "02"));
        selection.navigate(NavRequest::to(Page::NewsDetail));
        assert_eq!(selection.current_page, Page::NewsDetail);
        assert_eq!(selection.active_record_id, Some(RecordId::from("02")));

        selection.navigate(NavRequest::detail(Page::NewsDetail, 5_i64));
        assert_eq!(selection.active_record_id, Some(RecordId::Number(5)));
    }

    #[test]
    fn every_navigation_bumps_generation() {
        let mut selection = ViewSelection::default();
        selection.navigate(NavRequest::to(Page::Home));
        selection.navigate(NavRequest::to(Page::Home));
        assert_eq!(selection.generation, 2);
    }

    #[test]
    fn reducer_matches_direct_navigation() {
        let start = Rc::new(ViewSelection::default());
        let next = start.clone().reduce(NavRequest::detail(Page::NewsDetail, 2_i64));
        assert_eq!(next.current_page, Page::NewsDetail);
        assert_eq!(next.active_record_id, Some(RecordId::Number(2)));
        assert_eq!(start.current_page, Page::Home);
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: std::collections::HashSet<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs.len(), Page::ALL.len());
        assert_eq!(Page::NewsDetail.to_string(), "news-detail");
    }

    #[test]
    fn only_article_and_project_are_detail_pages() {
        let detail: Vec<Page> = Page::ALL.into_iter().filter(|p| p.is_detail()).collect();
        assert_eq!(detail, vec![Page::NewsDetail, Page::ProjectDetail]);
    }

    #[test]
    fn numeric_and_text_ids_differ() {
        assert_ne!(RecordId::Number(2), RecordId::from("2"));
        assert_eq!(RecordId::Number(2).to_string(), "2");
    }
}
