//! Generated edit controls.

use tabledom::Element;
use tabledom::element::generate_id;

use crate::config::EditorOptions;

/// Class shared by every generated control.
pub const INPUT_CLASS: &str = "tec-input";

/// One entry of a closed-choice select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Submitted value.
    pub value: String,
    /// Display text.
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for ChoiceOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// How a field is edited, resolved once when the editor is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    FreeText,
    Choice(Vec<ChoiceOption>),
}

/// An edit control for one field of a data cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    id: String,
    name: String,
    kind: InputKind,
    value: String,
}

impl Input {
    /// Build the control for `name`, using a select when a data provider is
    /// registered for it.
    pub fn resolve(name: impl Into<String>, value: impl Into<String>, options: &EditorOptions) -> Self {
        let name = name.into();
        let kind = match options.data_provider_for(&name) {
            Some(provider) => InputKind::Choice(provider()),
            None => InputKind::FreeText,
        };
        Self::new(name, value, kind)
    }

    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: InputKind) -> Self {
        let value = value.into();
        // A select always reports one of its options: the pre-selected one if
        // the value is offered, otherwise the first.
        let value = match &kind {
            InputKind::FreeText => value,
            InputKind::Choice(options) => {
                if options.iter().any(|o| o.value == value) {
                    value
                } else {
                    options.first().map(|o| o.value.clone()).unwrap_or_default()
                }
            }
        };

        Self {
            id: generate_id("input"),
            name: name.into(),
            kind,
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, InputKind::Choice(_))
    }

    /// Update the current value. A select only accepts one of its option
    /// values. Returns true if the value was accepted.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if let InputKind::Choice(options) = &self.kind {
            if !options.iter().any(|o| o.value == value) {
                return false;
            }
        }
        self.value = value;
        true
    }

    /// Project the control to an element.
    pub fn element(&self) -> Element {
        match &self.kind {
            InputKind::FreeText => Element::text_input(&self.name, &self.value)
                .id(&self.id)
                .class(INPUT_CLASS),
            InputKind::Choice(options) => Element::select(&self.name)
                .id(&self.id)
                .class(INPUT_CLASS)
                .children(options.iter().enumerate().map(|(i, o)| {
                    Element::option(&o.value, &o.label, o.value == self.value)
                        .id(format!("{}-option-{i}", self.id))
                })),
        }
    }
}
