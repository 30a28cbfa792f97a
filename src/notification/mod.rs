//! Notification types, filtering, and fetching.
//!
//! - `types`: wire types returned by the notification service
//! - `filter`: selects unacknowledged activations for a user
//! - `signal` / `sink`: outcome signals and where they are delivered
//! - `fetcher`: fetches one page and emits signals

mod fetcher;
mod filter;
mod signal;
mod sink;
mod types;

pub use fetcher::NotificationFetcher;
pub use filter::unacknowledged_notifications;
pub use signal::NotificationSignal;
pub use sink::{EventSink, TracingEventSink};
pub use types::{Notification, NotificationType, NotifiedUser};
