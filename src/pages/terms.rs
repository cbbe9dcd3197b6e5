use log::info;
use yew::prelude::*;

use crate::components::legal_layout::LegalLayout;
use crate::content::legal::{TERMS_CLAUSES, TERMS_SECTIONS};

#[function_component(Terms)]
pub fn terms() -> Html {
    info!("Rendering terms page");
    html! {
        <LegalLayout
            title="Terms of Service"
            updated="January 2025"
            sections={&TERMS_SECTIONS[..]}
            clauses={&TERMS_CLAUSES[..]}
        />
    }
}
