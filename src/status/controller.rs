#![forbid(unsafe_code)]

//! Event-driven status controller
//!
//! Three kinds of host notification (selection changed, active document
//! changed, configuration changed) all lead to the same refresh: look at the
//! active document, count it if it is markdown or plain text, and show or hide
//! the label. Refreshing is idempotent, so notifications need no ordering.

use crate::engine::CharacterCounter;
use crate::rules::RuleToggles;
use crate::status::{LabelStyle, StatusLabel};
use crate::types::LanguageKind;
use tracing::debug;

/// The host's active document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Host language identifier, e.g. `markdown`
    pub language_id: String,
    pub text: String,
}

impl Document {
    pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            text: text.into(),
        }
    }
}

/// Supplies the active document, if any
pub trait DocumentSource {
    fn active_document(&self) -> Option<Document>;
}

/// Supplies the per-rule "disabled" flags
pub trait ConfigSource {
    fn disabled_rules(&self) -> RuleToggles;
}

/// Shows or hides the status label
pub trait DisplaySink {
    fn show(&mut self, label: &StatusLabel);
    fn hide(&mut self);
}

/// Host notifications that trigger a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    SelectionChanged,
    ActiveDocumentChanged,
    ConfigurationChanged,
}

/// A sink that keeps the most recent label (None while hidden)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSlot {
    current: Option<StatusLabel>,
}

impl LabelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&StatusLabel> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

impl DisplaySink for LabelSlot {
    fn show(&mut self, label: &StatusLabel) {
        self.current = Some(label.clone());
    }

    fn hide(&mut self) {
        self.current = None;
    }
}

/// Keeps a display sink in sync with the active document
pub struct StatusController<D, C, S> {
    counter: CharacterCounter,
    documents: D,
    config: C,
    sink: S,
    style: LabelStyle,
}

impl<D, C, S> StatusController<D, C, S>
where
    D: DocumentSource,
    C: ConfigSource,
    S: DisplaySink,
{
    /// Creates the controller and performs the initial refresh
    pub fn new(documents: D, config: C, sink: S, style: LabelStyle) -> Self {
        let counter = CharacterCounter::with_toggles(&config.disabled_rules());
        let mut controller = Self {
            counter,
            documents,
            config,
            sink,
            style,
        };
        controller.refresh();
        controller
    }

    /// Reacts to one host notification
    pub fn handle(&mut self, event: StatusEvent) -> Option<usize> {
        if event == StatusEvent::ConfigurationChanged {
            self.reload_rules();
        }
        self.refresh()
    }

    /// Recounts the active document and updates the sink
    ///
    /// Returns the count shown, or None when the label was hidden.
    pub fn refresh(&mut self) -> Option<usize> {
        let Some(document) = self.documents.active_document() else {
            self.sink.hide();
            return None;
        };

        if LanguageKind::from_id(&document.language_id).is_none() {
            debug!(language_id = %document.language_id, "untracked document, hiding status");
            self.sink.hide();
            return None;
        }

        let count = self.counter.count(&document.text);
        self.sink.show(&self.style.label(count));
        Some(count)
    }

    fn reload_rules(&mut self) {
        let toggles = self.config.disabled_rules();
        for name in self.counter.apply_toggles(&toggles) {
            debug!(rule = %name, enabled = self.counter.is_enabled(name), "rule toggled");
        }
    }

    pub fn counter(&self) -> &CharacterCounter {
        &self.counter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the document source, for hosts that own it
    pub fn documents_mut(&mut self) -> &mut D {
        &mut self.documents
    }

    /// Mutable access to the configuration source, for hosts that own it
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    /// Consumes the controller and returns its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
