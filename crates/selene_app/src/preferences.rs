//! Persisted display-language preference.

use selene_locale::{Language, detect_language};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Store key holding the language code.
pub const LANGUAGE_KEY: &str = "selene.language";

/// Stored language, or on first run the device language (which is then
/// stored).
///
/// Storage failures are logged and never fatal: the detected language is
/// used for this session.
pub fn load_language<S: KeyValueStore>(store: &mut S, device_locale: &str) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(code)) => {
            if let Some(language) = Language::from_code(&code) {
                return language;
            }
            warn!(%code, "stored language not supported, detecting again");
        }
        Ok(None) => {}
        Err(e) => {
            warn!(error = %e, "failed to load language");
            return detect_language(device_locale);
        }
    }

    let detected = detect_language(device_locale);
    match store.set(LANGUAGE_KEY, detected.code()) {
        Ok(()) => info!(language = detected.code(), "language detected from device locale"),
        Err(e) => warn!(error = %e, "failed to persist detected language"),
    }
    detected
}

/// Persist a language choice.
pub fn save_language<S: KeyValueStore>(store: &mut S, language: Language) -> Result<(), StoreError> {
    store.set(LANGUAGE_KEY, language.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn first_run_detects_and_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(load_language(&mut store, "es-MX"), Language::Es);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn stored_choice_wins_over_device() {
        let mut store = MemoryStore::new();
        save_language(&mut store, Language::Ja).unwrap();
        assert_eq!(load_language(&mut store, "fr-FR"), Language::Ja);
    }

    #[test]
    fn unsupported_stored_code_is_replaced() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "xx").unwrap();
        assert_eq!(load_language(&mut store, "it-IT"), Language::It);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("it"));
    }
}
