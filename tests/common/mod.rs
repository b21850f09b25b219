//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use resume::render::Element;
use resume::view_model::ViewBindings;

/// The sample resume shipped in `demos/`.
pub const SAMPLE_RESUME: &str = include_str!("../../demos/resume.json");

/// Every literal example of the wire grammar.
pub const GRAMMAR_EXAMPLES: &[&str] = &[
    r#"{"stack":{"axis":"horizontal","subviews":[]}}"#,
    r#"{"stack":{"axis":"verticle","subviews":[{"title":{"text":"A"}}]}}"#,
    r#"{"title":{"text":"Title"}}"#,
    r#"{"heading":{"text":"Heading","alignment":"left"}}"#,
    r#"{"subheading":{"text":"Subheading","alignment":"right"}}"#,
    r#"{"body":{"text":"Body","alignment":"justified"}}"#,
    r#"{"bullet":{"text":"Bullet","alignment":"center"}}"#,
    r#"{"body":{"text":"Natural","alignment":"natural"}}"#,
    r#"{"space":{"value":20}}"#,
    r#"{"space":{"value":"flex"}}"#,
];

/// What the view model reported through its bindings.
#[derive(Debug, Default)]
pub struct Recorded {
    pub themes: Vec<&'static str>,
    pub contents: Vec<Element>,
    pub failures: Vec<String>,
}

impl Recorded {
    pub fn theme_calls(&self) -> usize {
        self.themes.len()
    }

    pub fn content_calls(&self) -> usize {
        self.contents.len()
    }
}

/// Bindings that append every callback to a shared [`Recorded`].
pub fn recording_bindings() -> (Rc<RefCell<Recorded>>, ViewBindings) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let themes = Rc::clone(&recorded);
    let contents = Rc::clone(&recorded);
    let failures = Rc::clone(&recorded);

    let bindings = ViewBindings::new()
        .on_theme_did_change(move |theme| themes.borrow_mut().themes.push(theme.name()))
        .on_content_view_did_change(move |element| contents.borrow_mut().contents.push(element))
        .on_content_load_did_fail(move |err| failures.borrow_mut().failures.push(err.error_code().to_string()));

    (recorded, bindings)
}
