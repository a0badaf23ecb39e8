//! # Shared Bus - State-Change Notifications
//!
//! Every state transition in the registry and the bridge coordinator emits a
//! structured event. Off-system observers (the relay, the counterparty's
//! watcher) subscribe here and drive the opposite leg of a swap; nothing in
//! this workspace blocks waiting for them.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Registry /  │    publish()       │   Observer   │
//! │  Coordinator │ ──────┐            │  (relay, …)  │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

pub use events::{new_correlation_id, CoordinationEvent, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events buffered per subscriber before the oldest are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
