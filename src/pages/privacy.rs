use log::info;
use yew::prelude::*;

use crate::components::legal_layout::LegalLayout;
use crate::content::legal::{PRIVACY_CLAUSES, PRIVACY_SECTIONS};

#[function_component(Privacy)]
pub fn privacy() -> Html {
    info!("Rendering privacy page");
    html! {
        <LegalLayout
            title="Privacy Policy"
            updated="January 2025"
            sections={&PRIVACY_SECTIONS[..]}
            clauses={&PRIVACY_CLAUSES[..]}
        />
    }
}
