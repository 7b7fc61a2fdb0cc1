//! Message catalogs for UI strings.
//!
//! Message ids are the English strings themselves; a missing translation
//! falls back to the id.

use leptos::prelude::*;
use std::collections::HashMap;

const RU_CATALOG: &str = include_str!("../../i18n/ru.json");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translator {
    locale: String,
    messages: HashMap<String, String>,
}

impl Translator {
    pub fn new(locale: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            messages,
        }
    }

    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, serde_json::Error> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(locale, messages))
    }

    /// Translator for one of the embedded locales; unknown locales get the identity translator.
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale.split(&['-', '_'][..]).next().unwrap_or(locale);
        let catalog = match lang {
            "ru" => Some(RU_CATALOG),
            _ => None,
        };
        match catalog.map(|json| Self::from_json(lang, json)) {
            Some(Ok(translator)) => translator,
            Some(Err(e)) => {
                log::error!("Broken message catalog for {}: {}", lang, e);
                Self::new(lang, HashMap::new())
            }
            None => Self::new(lang, HashMap::new()),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn string(&self, msgid: &str) -> String {
        self.messages
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}

/// The active translator; changes when the site locale arrives from the backend.
pub fn use_translator() -> RwSignal<Translator> {
    use_context::<RwSignal<Translator>>().expect("Translator not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_falls_back_to_id() {
        let tr = Translator::for_locale("en");
        assert_eq!(tr.string("My Bookings"), "My Bookings");
    }

    #[test]
    fn test_embedded_russian_catalog() {
        let tr = Translator::for_locale("ru_RU");
        assert_eq!(tr.locale(), "ru");
        assert_eq!(tr.string("Help"), "Справка");
        assert_eq!(tr.string("Not in catalog"), "Not in catalog");
    }

    #[test]
    fn test_header_and_dialog_strings_translated() {
        let tr = Translator::for_locale("ru");
        assert_eq!(tr.string("Room Booking"), "Бронирование комнат");
        assert_eq!(tr.string("Close"), "Закрыть");
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        assert!(Translator::from_json("de", r#"{"Help": 1}"#).is_err());
    }
}
