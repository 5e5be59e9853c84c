//! Bounded-memory element frames.
//!
//! The source reader runs on top of `lxml.etree.iterparse`, which by
//! default retains a whole subtree until its parent's `end` event fires —
//! handlers freely read `elem[0]` (first child) or iterate
//! `elem.iterchildren()` for attributes. Retaining full subtrees here would
//! make peak memory scale with document size instead of nesting depth, so
//! each open element keeps only what a parent handler actually needs: its
//! own tag/attributes, its accumulated text, and a shallow record of each
//! child's tag and attributes (not the child's own text or children) dropped
//! in as the child's `end` event fires.

use sdmx_urn::Tag;

/// A shallow record of one child element: enough for a parent to detect
/// "my first child is `<Ref>`" or read an attribute a structure-specific
/// data element encoded on a child, without retaining the child's subtree.
#[derive(Debug, Clone)]
pub struct ChildFrame {
    pub tag: Tag,
    pub attrs: Vec<(String, String)>,
    /// The child's own accumulated text, needed only for leaves a parent
    /// probes directly (`<URN>` inside a reference-bearing element); empty
    /// for every other child, since the child's own end-handler is what
    /// normally consumes its text.
    pub text: String,
}

/// The open state for one element between its `start` and `end` events.
#[derive(Debug, Clone)]
pub struct ElementFrame {
    pub tag: Tag,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<ChildFrame>,
}

impl ElementFrame {
    pub fn new(tag: Tag, attrs: Vec<(String, String)>) -> Self {
        Self {
            tag,
            attrs,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// The tag of this element's first child, if it has one.
    pub fn first_child_tag(&self) -> Option<Tag> {
        self.children.first().map(|c| c.tag)
    }
}
