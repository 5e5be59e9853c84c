//! Caller-configurable knobs for [`crate::read_message`].

use sdmx_urn::Class;

/// Options controlling how a message is read. Construct with
/// [`ReaderOptions::new`] and chain the `with_*` builders, mirroring
/// `StreamingOptions` in the ingest pipeline this reader was modeled on.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    pub(crate) default_locale: Option<String>,
    pub(crate) class_hint: Option<Class>,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override [`sdmx_model::DEFAULT_LOCALE`] for localized leaves that
    /// carry no `xml:lang` attribute.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Supply a fallback class hint for references whose `<Ref>` carries no
    /// `class` attribute and whose parent element's tag isn't itself a
    /// recognized class name.
    pub fn with_class_hint(mut self, class: Class) -> Self {
        self.class_hint = Some(class);
        self
    }

    pub(crate) fn default_locale(&self) -> &str {
        self.default_locale.as_deref().unwrap_or(sdmx_model::DEFAULT_LOCALE)
    }

    pub(crate) fn class_hint(&self) -> Option<Class> {
        self.class_hint
    }
}
