//! Status display for a single active document
//!
//! The host (an editor, or the CLI's `status` command) supplies the active
//! document, the rule configuration and a place to show the result. The
//! controller wires them to a [`CharacterCounter`](crate::engine::CharacterCounter)
//! and refreshes on every notification.

mod controller;
mod label;

pub use controller::{
    ConfigSource, DisplaySink, Document, DocumentSource, LabelSlot, StatusController,
    StatusEvent,
};
pub use label::{LabelStyle, StatusLabel};
