//! Preferred-content-size notifications.
//!
//! The host posts to a [`SizeCategoryNotifier`] whenever the user's preferred
//! content size changes (in the terminal: on resize). Subscribers receive a
//! [`Subscription`] that unsubscribes when dropped, so a torn-down view model
//! can never be called back.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Handler = Arc<dyn Fn() + Send + Sync>;

/// Token identifying one registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

#[derive(Default)]
struct Registry {
    next_token: u64,
    handlers: Vec<(SubscriptionToken, Handler)>,
}

/// Event source for preferred-content-size changes.
///
/// Cloning yields another handle to the same set of subscribers.
#[derive(Clone, Default)]
pub struct SizeCategoryNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl SizeCategoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`; it runs on every [`post`](Self::post) until the
    /// returned subscription is dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let token = SubscriptionToken(registry.next_token);
        registry.next_token += 1;
        registry.handlers.push((token, Arc::new(handler)));
        tracing::debug!(token = token.0, "Size category subscriber added");

        Subscription {
            registry: Arc::downgrade(&self.registry),
            token,
        }
    }

    /// Remove a handler. Returns false if the token was not registered.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        remove(&self.registry, token)
    }

    /// Notify every current subscriber.
    pub fn post(&self) {
        // Handlers run outside the lock so they may (un)subscribe.
        let handlers: Vec<Handler> = lock(&self.registry)
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in handlers {
            handler();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

impl std::fmt::Debug for SizeCategoryNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizeCategoryNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Scoped registration with a [`SizeCategoryNotifier`].
///
/// Dropping it removes the handler. It does not keep the notifier alive.
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    token: SubscriptionToken,
}

impl Subscription {
    pub fn token(&self) -> SubscriptionToken {
        self.token
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            remove(&registry, self.token);
        }
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

fn remove(registry: &Mutex<Registry>, token: SubscriptionToken) -> bool {
    let mut registry = lock(registry);
    let before = registry.handlers.len();
    registry.handlers.retain(|(t, _)| *t != token);
    let removed = registry.handlers.len() != before;
    if removed {
        tracing::debug!(token = token.0, "Size category subscriber removed");
    }
    removed
}
