//! Editor configuration.

mod classes;
mod providers;
mod strings;

pub use classes::MessageClasses;
pub use providers::{DataProvider, DataValidator, SaveCallback};
pub use strings::EditorStrings;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::editor::SaveData;
use crate::input::ChoiceOption;

/// Per-table configuration.
///
/// # Example
///
/// ```ignore
/// let options = EditorOptions::new()
///     .strings(EditorStrings {
///         submit_button: "Speichern".into(),
///         ..Default::default()
///     })
///     .data_provider("color", || [("1", "Red"), ("2", "Blue")])
///     .on_save(|data| println!("{data:?}"));
/// ```
#[derive(Clone)]
pub struct EditorOptions {
    /// Classes for message rows.
    pub classes: MessageClasses,

    /// Display strings.
    pub strings: EditorStrings,

    /// Called with the data object on a successful submit.
    /// `None` means a submit has no side effect beyond validation.
    pub save: Option<SaveCallback>,

    /// Fields rendered as a closed-choice select instead of free text.
    pub data_providers: HashMap<String, DataProvider>,

    /// Reserved per-field validators. Stored, never run.
    pub data_validators: HashMap<String, DataValidator>,

    /// Identifier override. Falls back to the table's `data-identifier`.
    pub identifier: Option<String>,

    /// Group key override. Falls back to the table's `data-group`.
    pub group: Option<String>,

    /// Show message rows at once instead of sliding them in.
    pub reduced_motion: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            classes: MessageClasses::default(),
            strings: EditorStrings::default(),
            save: Some(providers::log_payload()),
            data_providers: HashMap::new(),
            data_validators: HashMap::new(),
            identifier: None,
            group: None,
            reduced_motion: false,
        }
    }
}

impl std::fmt::Debug for EditorOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut providers: Vec<_> = self.data_providers.keys().collect();
        providers.sort();
        let mut validators: Vec<_> = self.data_validators.keys().collect();
        validators.sort();
        f.debug_struct("EditorOptions")
            .field("classes", &self.classes)
            .field("strings", &self.strings)
            .field("save", &self.save.as_ref().map(|_| "<callback>"))
            .field("data_providers", &providers)
            .field("data_validators", &validators)
            .field("identifier", &self.identifier)
            .field("group", &self.group)
            .field("reduced_motion", &self.reduced_motion)
            .finish()
    }
}

/// The serialisable subset of [`EditorOptions`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OptionsFile {
    classes: MessageClasses,
    strings: EditorStrings,
    identifier: Option<String>,
    group: Option<String>,
    reduced_motion: bool,
}

impl EditorOptions {
    /// Create options with default classes, strings and a logging save callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load classes, strings, identifier, group and reduced motion from JSON.
    ///
    /// Missing keys keep their defaults, so `{"strings": {"submitButton": "Go"}}`
    /// only changes the submit label.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: OptionsFile = serde_json::from_str(json)?;
        Ok(Self {
            classes: file.classes,
            strings: file.strings,
            identifier: file.identifier,
            group: file.group,
            reduced_motion: file.reduced_motion,
            ..Self::default()
        })
    }

    /// Set the message classes.
    pub fn classes(mut self, classes: MessageClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Set the display strings.
    pub fn strings(mut self, strings: EditorStrings) -> Self {
        self.strings = strings;
        self
    }

    /// Set the save callback.
    pub fn on_save<F>(mut self, f: F) -> Self
    where
        F: Fn(&SaveData) + Send + Sync + 'static,
    {
        self.save = Some(Arc::new(f));
        self
    }

    /// Drop the save callback.
    pub fn without_save(mut self) -> Self {
        self.save = None;
        self
    }

    /// Register a choice provider for a field.
    pub fn data_provider<F, I, V, L>(mut self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let provider: DataProvider = Arc::new(move || {
            f().into_iter()
                .map(|(value, label)| ChoiceOption::new(value, label))
                .collect()
        });
        self.data_providers.insert(field.into(), provider);
        self
    }

    /// Register a validator for a field. Validators are not run yet.
    pub fn data_validator<F>(mut self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.data_validators.insert(field.into(), Arc::new(f));
        self
    }

    /// Override the table identifier.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Override the group key.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Skip the slide-in of message rows.
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    pub fn has_data_provider(&self, field: &str) -> bool {
        self.data_providers.contains_key(field)
    }

    pub fn data_provider_for(&self, field: &str) -> Option<&DataProvider> {
        self.data_providers.get(field)
    }

    pub fn has_data_validator(&self, field: &str) -> bool {
        self.data_validators.contains_key(field)
    }
}
