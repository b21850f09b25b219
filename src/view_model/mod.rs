//! The view model that drives fetch, decode and render.
//!
//! [`DescribedViewModel`] owns the current theme and the current node tree.
//! It starts one document fetch when constructed; the fetch runs on a tokio
//! task and reports back through a [`ViewModelMessage`] channel, so all state
//! changes happen on the thread that calls [`DescribedViewModel::handle_message`].
//!
//! ```text
//! Empty ──DescriptorLoaded(Ok)──▶ Rendered ──set_theme / SizeCategoryChanged──▶ Rendered
//!   │                                 │
//!   └─DescriptorLoaded(Err): logged,  └─DescriptorLoaded(Ok): tree replaced
//!     no state change
//! ```

mod bindings;

pub use bindings::ViewBindings;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::descriptor::{self, Node};
use crate::error::{ResumeError, ResumeResult};
use crate::events::{SizeCategoryNotifier, Subscription};
use crate::render::{self, Element};
use crate::theme::{DefaultTheme, Theme};
use crate::traits::DataFetcher;

/// Work delivered to the view model from outside its thread.
#[derive(Debug)]
pub enum ViewModelMessage {
    /// The document fetch finished (decoded on the fetch task).
    DescriptorLoaded(ResumeResult<Node>),
    /// The preferred content size changed.
    SizeCategoryChanged,
}

/// Coordinates the document, the theme and the host bindings.
///
/// Not thread-safe: construct and drive it from one thread.
pub struct DescribedViewModel {
    theme: Arc<dyn Theme>,
    descriptor: Option<Node>,
    bindings: ViewBindings,
    message_tx: mpsc::UnboundedSender<ViewModelMessage>,
    /// Taken by hosts that poll the channel themselves.
    message_rx: Option<mpsc::UnboundedReceiver<ViewModelMessage>>,
    _size_subscription: Subscription,
}

impl DescribedViewModel {
    /// Create the view model with the default theme and start fetching the
    /// document. Must be called inside a tokio runtime.
    pub fn new(
        bindings: ViewBindings,
        fetcher: Arc<dyn DataFetcher>,
        notifier: &SizeCategoryNotifier,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let size_tx = message_tx.clone();
        let size_subscription = notifier.subscribe(move || {
            let _ = size_tx.send(ViewModelMessage::SizeCategoryChanged);
        });

        spawn_fetch(fetcher, message_tx.clone());

        Self {
            theme: Arc::new(DefaultTheme),
            descriptor: None,
            bindings,
            message_tx,
            message_rx: Some(message_rx),
            _size_subscription: size_subscription,
        }
    }

    pub fn theme(&self) -> &Arc<dyn Theme> {
        &self.theme
    }

    /// Replace the theme. Re-renders if a document is loaded, then notifies
    /// the theme binding.
    pub fn set_theme(&mut self, theme: Arc<dyn Theme>) {
        tracing::info!(theme = theme.name(), "Theme changed");
        self.theme = theme;
        self.render_current();
        (self.bindings.theme_did_change)(Arc::clone(&self.theme));
    }

    /// The current node tree, once loaded.
    pub fn descriptor(&self) -> Option<&Node> {
        self.descriptor.as_ref()
    }

    pub fn has_content(&self) -> bool {
        self.descriptor.is_some()
    }

    /// Sender for delivering messages to this view model, e.g. the result
    /// of a host-initiated re-fetch.
    pub fn message_sender(&self) -> mpsc::UnboundedSender<ViewModelMessage> {
        self.message_tx.clone()
    }

    /// Take the message receiver so the host can poll it in its own loop
    /// and pass each message to [`handle_message`](Self::handle_message).
    pub fn take_message_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<ViewModelMessage>> {
        self.message_rx.take()
    }

    /// Apply one message on the current thread.
    pub fn handle_message(&mut self, msg: ViewModelMessage) {
        match msg {
            ViewModelMessage::DescriptorLoaded(Ok(node)) => {
                tracing::info!(nodes = node.node_count(), "Resume document loaded");
                self.descriptor = Some(node);
                self.render_current();
            }
            ViewModelMessage::DescriptorLoaded(Err(err)) => {
                tracing::error!(
                    code = err.error_code(),
                    category = %err.category(),
                    "Failed to load resume document: {}",
                    err
                );
                (self.bindings.content_load_did_fail)(&err);
            }
            ViewModelMessage::SizeCategoryChanged => {
                if self.descriptor.is_some() {
                    tracing::debug!("Preferred content size changed, re-rendering");
                }
                self.render_current();
            }
        }
    }

    /// Wait for the next message and apply it. Returns false if the receiver
    /// was taken.
    pub async fn process_next(&mut self) -> bool {
        let msg = match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => return false,
        };
        match msg {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Apply every message already queued. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = match self.message_rx.as_mut() {
                Some(rx) => rx.try_recv().ok(),
                None => None,
            };
            let Some(msg) = next else {
                return handled;
            };
            self.handle_message(msg);
            handled += 1;
        }
    }

    fn render_current(&mut self) {
        let Some(node) = self.descriptor.as_ref() else {
            return;
        };
        let element: Element = render::render(node, self.theme.as_ref());
        (self.bindings.content_view_did_change)(element);
    }
}

impl std::fmt::Debug for DescribedViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribedViewModel")
            .field("theme", &self.theme.name())
            .field("has_content", &self.descriptor.is_some())
            .finish_non_exhaustive()
    }
}

fn spawn_fetch(fetcher: Arc<dyn DataFetcher>, tx: mpsc::UnboundedSender<ViewModelMessage>) {
    tokio::spawn(async move {
        tracing::debug!(location = fetcher.location(), "Fetching resume document");
        let result = match fetcher.fetch().await {
            Ok(bytes) => descriptor::decode(&bytes).map_err(ResumeError::from),
            Err(err) => Err(ResumeError::from(err)),
        };
        // The view model may already be gone.
        let _ = tx.send(ViewModelMessage::DescriptorLoaded(result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::StaticDataFetcher;
    use crate::error::FetchError;
    use crate::theme::AlternativeTheme;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        themes: Vec<&'static str>,
        contents: Vec<Element>,
        failures: usize,
    }

    fn recording() -> (Rc<RefCell<Calls>>, ViewBindings) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let (a, b, c) = (calls.clone(), calls.clone(), calls.clone());
        let bindings = ViewBindings::new()
            .on_theme_did_change(move |theme| a.borrow_mut().themes.push(theme.name()))
            .on_content_view_did_change(move |element| b.borrow_mut().contents.push(element))
            .on_content_load_did_fail(move |_| c.borrow_mut().failures += 1);
        (calls, bindings)
    }

    #[tokio::test]
    async fn test_initial_fetch_renders_once() {
        let (calls, bindings) = recording();
        let fetcher = StaticDataFetcher::document(r#"{"space":{"value":20}}"#);
        let notifier = SizeCategoryNotifier::new();
        let mut vm = DescribedViewModel::new(bindings, Arc::new(fetcher.clone()), &notifier);

        assert!(!vm.has_content());
        assert!(vm.process_next().await);

        assert_eq!(calls.borrow().contents.len(), 1);
        assert!(calls.borrow().themes.is_empty());
        assert_eq!(fetcher.call_count(), 1);
        assert_eq!(vm.theme().name(), "Default");
        assert!(vm.has_content());
    }

    #[tokio::test]
    async fn test_set_theme_without_content_only_notifies_theme() {
        let (calls, bindings) = recording();
        let fetcher = StaticDataFetcher::failing(FetchError::ErrorStatus(500));
        let notifier = SizeCategoryNotifier::new();
        let mut vm = DescribedViewModel::new(bindings, Arc::new(fetcher), &notifier);

        vm.set_theme(Arc::new(AlternativeTheme));

        assert_eq!(calls.borrow().themes, vec!["Alternative"]);
        assert!(calls.borrow().contents.is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_state() {
        let (calls, bindings) = recording();
        let fetcher = StaticDataFetcher::document(r#"{"title":{"text":"A"},"body":{"text":"B"}}"#);
        let notifier = SizeCategoryNotifier::new();
        let mut vm = DescribedViewModel::new(bindings, Arc::new(fetcher), &notifier);

        vm.process_next().await;

        assert!(!vm.has_content());
        assert!(calls.borrow().contents.is_empty());
        assert_eq!(calls.borrow().failures, 1);
    }

    #[tokio::test]
    async fn test_taken_receiver() {
        let (_, bindings) = recording();
        let fetcher = StaticDataFetcher::document(r#"{"space":{"value":"flex"}}"#);
        let notifier = SizeCategoryNotifier::new();
        let mut vm = DescribedViewModel::new(bindings, Arc::new(fetcher), &notifier);

        let mut rx = vm.take_message_receiver().unwrap();
        assert!(vm.take_message_receiver().is_none());
        assert!(!vm.process_next().await);
        assert_eq!(vm.process_pending(), 0);

        let msg = rx.recv().await.unwrap();
        vm.handle_message(msg);
        assert!(vm.has_content());
    }
}
