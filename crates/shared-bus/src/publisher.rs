//! # Event Publisher
//!
//! Publishing side of the event bus.

use crate::events::{CoordinationEvent, EventTopic};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Trait for publishing coordination events.
///
/// The registry and the bridge coordinator hold this as an injected
/// dependency; publishing never blocks and never fails the publishing
/// operation — an event with no listeners is still a valid transition.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event. Returns the number of subscribers that received it.
    async fn publish(&self, event: CoordinationEvent) -> usize;

    /// Total events published so far.
    fn events_published(&self) -> u64;
}

/// In-memory event bus.
///
/// Uses `tokio::sync::broadcast` for multi-producer, multi-consumer
/// semantics. Suitable for single-node operation; a distributed deployment
/// would put a durable transport behind the same trait.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<CoordinationEvent>,
    events_published: AtomicU64,
}

impl InMemoryEventBus {
    /// Create a bus with the default per-subscriber capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bus with an explicit per-subscriber capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
        }
    }

    /// Subscribe to all events.
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.sender.subscribe(), None)
    }

    /// Subscribe to a single topic.
    pub fn subscribe_topic(&self, topic: EventTopic) -> Subscription {
        Subscription::new(self.sender.subscribe(), Some(topic))
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: CoordinationEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        // send() errs when no receiver exists; that is not a failure here.
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                debug!("[bus] no subscribers for {:?}", event.topic());
                0
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
