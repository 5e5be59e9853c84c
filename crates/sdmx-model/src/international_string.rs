//! Localized text per SDMX-IM's `InternationalString`.

use serde::{Deserialize, Serialize};

/// Locale used when an XML element carries no `xml:lang` attribute.
pub const DEFAULT_LOCALE: &str = "en";

/// A set of `(locale, label)` pairs, at most one label per locale.
///
/// Stored in insertion order rather than sorted by locale: specimens list
/// localizations in document order, and structural-equality comparisons in
/// the test suite rely on that order surviving a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternationalString(Vec<(String, String)>);

impl InternationalString {
    /// An empty `InternationalString`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the label for `locale`.
    pub fn add_localization(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        let locale = locale.into();
        let text = text.into();
        if let Some(entry) = self.0.iter_mut().find(|(l, _)| *l == locale) {
            entry.1 = text;
        } else {
            self.0.push((locale, text));
        }
    }

    /// Insert every `(locale, label)` pair from `values`, in order.
    pub fn extend(&mut self, values: impl IntoIterator<Item = (String, String)>) {
        for (locale, text) in values {
            self.add_localization(locale, text);
        }
    }

    /// The label for `locale`, if any.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, t)| t.as_str())
    }

    /// The label for [`DEFAULT_LOCALE`], if any.
    pub fn default_label(&self) -> Option<&str> {
        self.get(DEFAULT_LOCALE)
    }

    /// Whether no localizations have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(locale, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }
}

impl From<Vec<(String, String)>> for InternationalString {
    fn from(values: Vec<(String, String)>) -> Self {
        let mut out = Self::new();
        out.extend(values);
        out
    }
}

impl<'a> IntoIterator for &'a InternationalString {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_locale() {
        let mut s = InternationalString::new();
        s.add_localization("en", "Sex");
        s.add_localization("en", "Gender");
        assert_eq!(s.get("en"), Some("Gender"));
        assert_eq!(s.iter().count(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut s = InternationalString::new();
        s.add_localization("fr", "Sexe");
        s.add_localization("en", "Sex");
        let locales: Vec<_> = s.iter().map(|(l, _)| l).collect();
        assert_eq!(locales, vec!["fr", "en"]);
    }
}
