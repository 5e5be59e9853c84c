//! `str:Agency`, `str:Code`, `str:Category`, `str:DataProvider`: item scheme
//! members.
//!
//! A bare `<Ref>`/`<URN>` child means this element only references an item
//! declared elsewhere (e.g. a `<str:DataProvider>` inside a
//! `ConstraintAttachment`) rather than declaring one; anything else is a
//! full item, possibly nesting further items of the same tag (a `Code`
//! under a parent `Code`) or carrying a `<str:Parent>` reference to a
//! sibling declared elsewhere in the scheme.

use sdmx_model::Item;
use sdmx_urn::{Class, Tag};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::reference::from_first_child;
use crate::stack::{BucketKey, Value};

const LOCALIZATION_BUCKETS: &[&str] = &["Name", "Description"];

pub fn item_start(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    driver.stack.stash(LOCALIZATION_BUCKETS);
    Ok(())
}

pub fn item_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Class::normalize_ref_class(frame.tag.local()))? {
        driver.stack.unstash(LOCALIZATION_BUCKETS.len());
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    let nameable = support::nameable(&mut driver.stack, frame);
    let mut item = Item {
        nameable,
        parent_id: None,
    };

    // Nested same-tag XML children were already parsed and pushed onto the
    // Item bucket by their own end handlers; claim exactly as many as this
    // element has.
    let nested_count = frame.children.iter().filter(|c| c.tag == frame.tag).count();
    let mut nested_items = Vec::with_capacity(nested_count);
    for _ in 0..nested_count {
        if let Some(Value::Item(nested)) = driver.stack.pop_single(BucketKey::Item) {
            nested_items.push(nested);
        }
    }
    for mut nested in nested_items {
        nested.parent_id = Some(item.id.clone());
        driver.stack.push(Value::Item(nested));
    }

    if let Some(Value::Reference(parent_ref)) = driver.stack.pop_single(Tag::Parent.local()) {
        item.parent_id = Some(parent_ref.child_id.clone());
    }

    driver.stack.unstash(LOCALIZATION_BUCKETS.len());
    driver.stack.push(Value::Item(Box::new(item)));
    Ok(())
}
