//! Notification sinks
//!
//! Fire-and-forget channel for non-fatal warnings ("service unavailable").
//! A sink never blocks the caller and never reports failure back.

use tokio::sync::mpsc;
use tracing::warn;

use crate::models::Notice;

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Logs notices; the default sink
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        warn!(title = %notice.title, "{}", notice.description);
    }
}

/// Forwards notices to a receiver owned by the presenting surface
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    /// Sink plus the receiver the surface drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: &Notice) {
        // Receiver gone means nobody is listening any more
        let _ = self.tx.send(notice.clone());
    }
}
