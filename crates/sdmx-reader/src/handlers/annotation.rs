//! `com:Annotation` and its children.

use sdmx_model::{Annotation, InternationalString};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::stack::Value;

fn pop_text(driver: &mut Driver, name: &str) -> Option<String> {
    match driver.stack.pop_single(name) {
        Some(Value::Text(text)) => Some(text),
        _ => None,
    }
}

pub fn annotation_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let title = pop_text(driver, "AnnotationTitle");
    let annotation_type = pop_text(driver, "AnnotationType");
    let url = pop_text(driver, "AnnotationURL");

    let mut text = InternationalString::new();
    for value in driver.stack.pop_all("AnnotationText") {
        if let Value::Localization(locale, label) = value {
            text.add_localization(locale, label);
        }
    }

    let annotation = Annotation {
        id: frame.attr("id").map(str::to_string),
        title,
        annotation_type,
        url,
        text,
    };
    driver.stack.push(Value::Annotation(Box::new(annotation)));
    Ok(())
}
