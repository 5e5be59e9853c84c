//! Leaf handlers: elements whose only job is to push their text, their
//! `(locale, text)` pair, or a resolved `Reference`, keyed by localname for
//! their parent to drain.

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::reference::{class_hint_for, from_first_child};
use crate::stack::Value;

/// Push a text-bearing leaf's content verbatim, keyed by its localname.
pub fn text_leaf(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    driver.stack.push_named(frame.tag.local(), Value::Text(frame.text.clone()));
    Ok(())
}

/// Push a localized leaf's `(xml:lang or default locale, text)` pair, keyed
/// by its localname.
pub fn localization_leaf(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let locale = frame
        .attr("xml:lang")
        .map(str::to_string)
        .unwrap_or_else(|| driver.options.default_locale().to_string());
    driver
        .stack
        .push_named(frame.tag.local(), Value::Localization(locale, frame.text.clone()));
    Ok(())
}

/// Push a reference leaf's resolved `Reference`, keyed by its localname, so
/// the enclosing element can pop it by name when it ends.
pub fn reference_leaf(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let hint = class_hint_for(frame.tag).or_else(|| driver.options.class_hint());
    if let Some(reference) = from_first_child(frame, hint)? {
        driver
            .stack
            .push_named(frame.tag.local(), Value::Reference(Box::new(reference)));
    }
    Ok(())
}
