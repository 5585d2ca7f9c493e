//! Inline table messages.

use std::time::{Duration, Instant};

use log::trace;
use tabledom::element::generate_id;
use tabledom::{Easing, TransitionConfig};

use super::TableEditor;

/// Severity of a table message. Selects the row's class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Info,
    Success,
}

/// A message row shown above the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMessage {
    id: String,
    text: String,
    kind: Option<MessageKind>,
}

impl TableMessage {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }
}

/// Slide-down used when a message row appears.
pub(crate) fn reveal_transition() -> TransitionConfig {
    TransitionConfig::new(Duration::from_millis(400), Easing::EaseInOut)
}

impl TableEditor {
    /// Prepend a message row and start revealing it. Returns the row's ID.
    pub fn set_table_message(
        &mut self,
        text: impl Into<String>,
        kind: impl Into<Option<MessageKind>>,
    ) -> String {
        let message = TableMessage {
            id: generate_id("tbody"),
            text: text.into(),
            kind: kind.into(),
        };
        let id = message.id.clone();

        trace!("Table {} message {:?}: {}", self.shell.id, message.kind, message.text);
        self.reveals.start(id.clone(), reveal_transition(), Instant::now());
        self.messages.insert(0, message);
        id
    }

    /// Remove every message row.
    pub fn clear_table_messages(&mut self) {
        for message in self.messages.drain(..) {
            self.reveals.forget(&message.id);
        }
    }

    /// Per-field message hook. Accepted and ignored.
    pub fn set_field_message(
        &mut self,
        _field: &str,
        _message: &str,
        _kind: impl Into<Option<MessageKind>>,
    ) {
    }

    /// Message rows, newest first.
    pub fn messages(&self) -> &[TableMessage] {
        &self.messages
    }

    /// Eased reveal progress of a message row at `now` (1.0 once shown).
    pub fn reveal_progress(&self, message_id: &str, now: Instant) -> f32 {
        self.reveals.progress(message_id, now)
    }

    /// Stop tracking message reveals that have finished.
    pub fn prune_reveals(&mut self, now: Instant) {
        self.reveals.prune(now);
    }
}
