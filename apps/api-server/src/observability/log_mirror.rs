//! Log mirror layer for tracing.
//!
//! Copies WARN and ERROR events into the `logs` collection so the dev
//! dashboard can show recent operational trouble without shell access.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context};

use raga_core::domain::LogEntry;
use raga_core::ports::LogRepository;

const DEFAULT_BUFFER: usize = 100;

/// Tracing layer that forwards qualifying events over a channel.
pub struct LogMirrorLayer {
    sender: mpsc::Sender<LogEntry>,
}

/// Receiving half, attached to a repository once the state is built.
pub struct LogMirrorHandle {
    receiver: mpsc::Receiver<LogEntry>,
}

impl LogMirrorLayer {
    /// Create the layer and its unattached handle. The layer can be
    /// installed immediately; events buffer until `attach` runs.
    pub fn channel() -> (Self, LogMirrorHandle) {
        let (sender, receiver) = mpsc::channel(DEFAULT_BUFFER);
        (Self { sender }, LogMirrorHandle { receiver })
    }
}

impl LogMirrorHandle {
    /// Start draining mirrored events into the repository.
    pub fn attach(mut self, repo: Arc<dyn LogRepository>) {
        tokio::spawn(async move {
            while let Some(entry) = self.receiver.recv().await {
                // Append failures are dropped; a mirror that errors on its
                // own error events would feed back into itself.
                let _ = repo.append(entry).await;
            }
        });
    }
}

/// Visitor to extract the message field from events.
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

impl<S> Layer<S> for LogMirrorLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // WARN and above only (tracing orders ERROR lowest).
        let level = *event.metadata().level();
        if level > tracing::Level::WARN {
            return;
        }

        // The database drivers log through tracing too; mirroring their
        // warnings would loop on a broken connection.
        let target = event.metadata().target();
        if target.starts_with("sea_orm") || target.starts_with("sqlx") {
            return;
        }

        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        // Non-blocking send; a full buffer drops the entry.
        let _ = self
            .sender
            .try_send(LogEntry::new(level.to_string(), target, visitor.message));
    }
}
