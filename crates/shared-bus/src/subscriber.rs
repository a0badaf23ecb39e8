//! # Event Subscriber
//!
//! Receiving side of the event bus.

use crate::events::{CoordinationEvent, EventTopic};
use thiserror::Error;
use tokio::sync::broadcast;

/// Errors surfaced to a subscriber.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus was dropped; no further events will arrive.
    #[error("event bus closed")]
    Closed,
    /// The subscriber fell behind and `count` events were discarded.
    #[error("subscriber lagged, {count} events dropped")]
    Lagged {
        /// Number of events dropped.
        count: u64,
    },
}

/// A live subscription, optionally filtered to one topic.
pub struct Subscription {
    receiver: broadcast::Receiver<CoordinationEvent>,
    topic: Option<EventTopic>,
}

impl Subscription {
    pub(crate) fn new(
        receiver: broadcast::Receiver<CoordinationEvent>,
        topic: Option<EventTopic>,
    ) -> Self {
        Self { receiver, topic }
    }

    /// Receive the next matching event, skipping filtered-out topics.
    pub async fn recv(&mut self) -> Result<CoordinationEvent, SubscriptionError> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => match self.topic {
                    Some(topic) if event.topic() != topic => continue,
                    _ => return Ok(event),
                },
                Err(broadcast::error::RecvError::Closed) => return Err(SubscriptionError::Closed),
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    return Err(SubscriptionError::Lagged { count })
                }
            }
        }
    }

    /// Non-blocking receive; `None` when no matching event is queued.
    pub fn try_recv(&mut self) -> Option<CoordinationEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => match self.topic {
                    Some(topic) if event.topic() != topic => continue,
                    _ => return Some(event),
                },
                Err(_) => return None,
            }
        }
    }
}
