use log::info;
use yew::prelude::*;

use crate::components::legal_layout::LegalLayout;
use crate::consent::{ConsentChoice, ConsentStore, LocalConsentStore};
use crate::content::legal::{COOKIE_CLAUSES, COOKIE_SECTIONS};

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    info!("Rendering cookie policy page");
    let stored = LocalConsentStore.read();
    let status = match stored.as_deref().and_then(ConsentChoice::parse) {
        Some(choice) => format!("Your current preference: {}.", choice),
        None => "You have not recorded a cookie preference on this device yet.".to_string(),
    };

    html! {
        <LegalLayout
            title="Cookie Policy"
            updated="January 2025"
            sections={&COOKIE_SECTIONS[..]}
            clauses={&COOKIE_CLAUSES[..]}
        >
            <p class="cookie-status">{status}</p>
        </LegalLayout>
    }
}
