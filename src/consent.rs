use std::fmt;

use log::{debug, info};
use thiserror::Error;
use web_sys::window;

pub const CONSENT_STORAGE_KEY: &str = "agasset_cookie_consent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentChoice::Accepted),
            "declined" => Some(ConsentChoice::Declined),
            _ => None,
        }
    }
}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConsentError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("failed to write consent: {0}")]
    WriteFailed(String),
}

/// Where the consent flag lives. The browser implementation is
/// `LocalConsentStore`.
pub trait ConsentStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str) -> Result<(), ConsentError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalConsentStore;

impl ConsentStore for LocalConsentStore {
    fn read(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(CONSENT_STORAGE_KEY).ok())
            .flatten()
    }

    fn write(&self, value: &str) -> Result<(), ConsentError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(ConsentError::StorageUnavailable)?;
        storage
            .set_item(CONSENT_STORAGE_KEY, value)
            .map_err(|e| ConsentError::WriteFailed(format!("{:?}", e)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerState {
    /// A choice is already stored, or the visitor closed the banner.
    Hidden,
    /// No choice stored yet; waiting for the reveal delay.
    Scheduled,
    Visible,
}

/// Decides whether the consent banner shows and records the visitor's answer.
pub struct ConsentGate<S: ConsentStore> {
    store: S,
    state: BannerState,
}

impl<S: ConsentStore> ConsentGate<S> {
    /// Any stored value counts as decided, even one we do not recognise.
    pub fn mount(store: S) -> Self {
        let state = match store.read() {
            Some(value) => {
                debug!("Consent already recorded: {}", value);
                BannerState::Hidden
            }
            None => BannerState::Scheduled,
        };
        Self { store, state }
    }

    pub fn is_visible(&self) -> bool {
        self.state == BannerState::Visible
    }

    pub fn needs_reveal(&self) -> bool {
        self.state == BannerState::Scheduled
    }

    /// Called when the reveal delay elapses.
    pub fn reveal(&mut self) {
        if self.state == BannerState::Scheduled {
            self.state = BannerState::Visible;
        }
    }

    pub fn accept(&mut self) -> Result<(), ConsentError> {
        self.decide(ConsentChoice::Accepted)
    }

    pub fn decline(&mut self) -> Result<(), ConsentError> {
        self.decide(ConsentChoice::Declined)
    }

    /// Hides the banner for this session only; nothing is persisted.
    pub fn dismiss(&mut self) {
        debug!("Consent banner dismissed without a choice");
        self.state = BannerState::Hidden;
    }

    /// The banner hides even if the write fails; the error is handed back so
    /// the caller can log it.
    fn decide(&mut self, choice: ConsentChoice) -> Result<(), ConsentError> {
        self.state = BannerState::Hidden;
        info!("Cookie consent {}", choice);
        self.store.write(choice.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared between gates to simulate reloads against the same storage.
    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
        fail_writes: bool,
    }

    impl ConsentStore for MemoryStore {
        fn read(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn write(&self, value: &str) -> Result<(), ConsentError> {
            if self.fail_writes {
                return Err(ConsentError::StorageUnavailable);
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn first_visit_schedules_banner() {
        let mut gate = ConsentGate::mount(MemoryStore::default());
        assert!(gate.needs_reveal());
        assert!(!gate.is_visible());
        gate.reveal();
        assert!(gate.is_visible());
    }

    #[test]
    fn accept_persists_and_never_shows_again() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::mount(store.clone());
        gate.reveal();
        gate.accept().unwrap();
        assert!(!gate.is_visible());
        assert_eq!(store.read().as_deref(), Some("accepted"));

        let mut reloaded = ConsentGate::mount(store);
        assert!(!reloaded.needs_reveal());
        reloaded.reveal();
        assert!(!reloaded.is_visible());
    }

    #[test]
    fn decline_persists() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::mount(store.clone());
        gate.reveal();
        gate.decline().unwrap();
        assert_eq!(store.read().as_deref(), Some("declined"));
        assert!(!ConsentGate::mount(store).needs_reveal());
    }

    #[test]
    fn dismiss_is_session_only() {
        let store = MemoryStore::default();
        let mut gate = ConsentGate::mount(store.clone());
        gate.reveal();
        gate.dismiss();
        assert!(!gate.is_visible());
        assert_eq!(store.read(), None);

        let reloaded = ConsentGate::mount(store);
        assert!(reloaded.needs_reveal());
    }

    #[test]
    fn unrecognised_stored_value_counts_as_decided() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some("maybe".to_string());
        let gate = ConsentGate::mount(store);
        assert!(!gate.needs_reveal());
        assert!(!gate.is_visible());
    }

    #[test]
    fn failed_write_still_hides_banner() {
        let store = MemoryStore { fail_writes: true, ..Default::default() };
        let mut gate = ConsentGate::mount(store);
        gate.reveal();
        assert_eq!(gate.accept(), Err(ConsentError::StorageUnavailable));
        assert!(!gate.is_visible());
    }

    #[test]
    fn choice_strings() {
        assert_eq!(ConsentChoice::parse("accepted"), Some(ConsentChoice::Accepted));
        assert_eq!(ConsentChoice::parse(ConsentChoice::Declined.as_str()), Some(ConsentChoice::Declined));
        assert_eq!(ConsentChoice::parse("yes"), None);
    }
}
