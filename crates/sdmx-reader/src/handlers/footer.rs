//! `footer:Footer`: the optional fault report carried by an error message,
//! and the `footer:Message` children that make it up.
//!
//! Each `footer:Message` carries its own `severity`/`code` attributes in the
//! schema, but [`sdmx_model::Footer`] keeps one severity/code for the whole
//! footer, taken from the first message; the text of every message is kept.

use sdmx_model::{Footer, InternationalString, Severity};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::stack::{BucketKey, Value};

fn severity_from_str(raw: &str) -> Option<Severity> {
    match raw {
        "Error" => Some(Severity::Error),
        "Warning" => Some(Severity::Warning),
        "Information" => Some(Severity::Information),
        _ => None,
    }
}

pub fn footer_message_end(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    let mut text = InternationalString::new();
    for value in driver.stack.pop_all("Text") {
        if let Value::Localization(locale, label) = value {
            text.add_localization(locale, label);
        }
    }
    driver.stack.push(Value::FooterText(Box::new(text)));
    Ok(())
}

pub fn footer_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let first_message = frame.children.first();
    let severity = first_message
        .and_then(|c| c.attrs.iter().find(|(k, _)| k == "severity"))
        .and_then(|(_, v)| severity_from_str(v))
        .unwrap_or(Severity::Information);
    let code = first_message
        .and_then(|c| c.attrs.iter().find(|(k, _)| k == "code"))
        .and_then(|(_, v)| v.parse().ok());

    let text = driver
        .stack
        .pop_all(BucketKey::FooterText)
        .into_iter()
        .filter_map(|v| match v {
            Value::FooterText(t) => Some(*t),
            _ => None,
        })
        .collect();

    driver.stack.push(Value::Footer(Box::new(Footer { severity, code, text })));
    Ok(())
}
