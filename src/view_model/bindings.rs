//! Host callbacks invoked by the view model.

use std::sync::Arc;

use crate::error::ResumeError;
use crate::render::Element;
use crate::theme::Theme;

type ThemeCallback = Box<dyn FnMut(Arc<dyn Theme>)>;
type ContentCallback = Box<dyn FnMut(Element)>;
type FailureCallback = Box<dyn FnMut(&ResumeError)>;

/// Callbacks through which the view model reports changes to its host.
///
/// Every callback defaults to a no-op. Callbacks run on the thread that
/// drives the view model and need not be `Send`.
pub struct ViewBindings {
    pub(crate) theme_did_change: ThemeCallback,
    pub(crate) content_view_did_change: ContentCallback,
    pub(crate) content_load_did_fail: FailureCallback,
}

impl ViewBindings {
    pub fn new() -> Self {
        Self {
            theme_did_change: Box::new(|_| {}),
            content_view_did_change: Box::new(|_| {}),
            content_load_did_fail: Box::new(|_| {}),
        }
    }

    /// Called after every theme assignment, with the new theme.
    pub fn on_theme_did_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Arc<dyn Theme>) + 'static,
    {
        self.theme_did_change = Box::new(callback);
        self
    }

    /// Called with each freshly rendered element tree.
    pub fn on_content_view_did_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Element) + 'static,
    {
        self.content_view_did_change = Box::new(callback);
        self
    }

    /// Called when fetching or decoding the document fails. Without this
    /// binding a failure is only logged.
    pub fn on_content_load_did_fail<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ResumeError) + 'static,
    {
        self.content_load_did_fail = Box::new(callback);
        self
    }
}

impl Default for ViewBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewBindings").finish_non_exhaustive()
    }
}
