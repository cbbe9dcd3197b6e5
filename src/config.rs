use log::Level;

const DEFAULT_ASSISTANT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ASSISTANT_MODEL: &str = "gemini-3-flash-preview";

/// Delay before the cookie banner slides in on a first visit.
pub const CONSENT_BANNER_DELAY_MS: u32 = 1500;
pub const ABOUT_SLIDER_PERIOD_MS: u32 = 6000;
pub const NEWS_CAROUSEL_PERIOD_MS: u32 = 8000;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

/// Sticky header clearance used when jumping to a legal section.
pub const LEGAL_SCROLL_OFFSET: f64 = 120.0;
/// Clearance for the Team and Project Detail sub-navigation bars.
pub const SUBNAV_SCROLL_OFFSET: f64 = 140.0;

pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn assistant_base_url() -> &'static str {
    option_env!("AGASSET_GENAI_BASE_URL").unwrap_or(DEFAULT_ASSISTANT_BASE_URL)
}

pub fn assistant_model() -> &'static str {
    option_env!("AGASSET_GENAI_MODEL").unwrap_or(DEFAULT_ASSISTANT_MODEL)
}

/// Baked in at build time. Without a key every question degrades to the
/// assistant's fallback reply.
pub fn assistant_api_key() -> Option<&'static str> {
    option_env!("AGASSET_GENAI_API_KEY").filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_periods() {
        assert_eq!(CONSENT_BANNER_DELAY_MS, 1500);
        assert_eq!(ABOUT_SLIDER_PERIOD_MS, 6000);
        assert_eq!(NEWS_CAROUSEL_PERIOD_MS, 8000);
    }

    #[test]
    fn subnav_pages_clear_a_taller_header_than_legal_pages() {
        assert_eq!(LEGAL_SCROLL_OFFSET, 120.0);
        assert_eq!(SUBNAV_SCROLL_OFFSET, 140.0);
    }
}
