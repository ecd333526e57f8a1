//! Subscription records binding page components to input events.
//!
//! Components are registered once at start-up; the frame loop routes each
//! event only to live subscriptions, and teardown clears them all.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Tick,
    Scroll,
    Click,
    Key,
    Text,
    PointerMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    Navigation,
    Carousel,
    Reveal,
    ContactForm,
    Notification,
    Cursor,
    Typing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub kind: EventKind,
    pub handler: Handler,
}

#[derive(Debug, Default)]
pub struct Subscriptions {
    next_id: u64,
    records: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.records.push(Subscription { id, kind, handler });
        tracing::debug!(?kind, ?handler, id = id.0, "subscribed");
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Handlers subscribed to `kind`, in registration order.
    pub fn handlers_for(&self, kind: EventKind) -> impl Iterator<Item = Handler> + '_ {
        self.records
            .iter()
            .filter(move |record| record.kind == kind)
            .map(|record| record.handler)
    }

    pub fn is_subscribed(&self, kind: EventKind, handler: Handler) -> bool {
        self.handlers_for(kind).any(|h| h == handler)
    }

    pub fn clear(&mut self) {
        tracing::debug!(count = self.records.len(), "dropping all subscriptions");
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
