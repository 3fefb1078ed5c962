//! Settings item enumeration.
//!
//! Builds the flat list of company settings rows, used by both the settings
//! handler (for editing) and the settings panel widget (for rendering).

use crate::settings_tracker::{FieldValue, SettingsChangeTracker, SettingsField};

/// Value shown in a settings row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Bool(bool),
}

impl SettingValue {
    pub fn display(&self) -> String {
        match self {
            SettingValue::Text(s) if s.is_empty() => "(not set)".to_string(),
            SettingValue::Text(s) => s.clone(),
            SettingValue::Bool(true) => "on".to_string(),
            SettingValue::Bool(false) => "off".to_string(),
        }
    }
}

impl From<FieldValue> for SettingValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => SettingValue::Text(s),
            FieldValue::Flag(b) => SettingValue::Bool(b),
        }
    }
}

/// One row of the settings screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    pub field: SettingsField,
    pub label: String,
    pub description: String,
    pub value: SettingValue,
    pub readonly: bool,
    /// Visible but cannot be changed right now
    pub disabled: bool,
    /// Differs from the saved baseline
    pub modified: bool,
    pub section: String,
}

impl SettingItem {
    pub fn new(field: SettingsField) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            description: String::new(),
            value: SettingValue::Text(String::new()),
            readonly: !field.is_editable(),
            disabled: false,
            modified: false,
            section: String::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn value(mut self, val: SettingValue) -> Self {
        self.value = val;
        self
    }

    pub fn section(mut self, sec: impl Into<String>) -> Self {
        self.section = sec.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn modified(mut self, modified: bool) -> Self {
        self.modified = modified;
        self
    }

    /// Whether the row can be edited or toggled
    pub fn is_interactive(&self) -> bool {
        !self.readonly && !self.disabled
    }
}

/// All rows, in display order
pub fn settings_items(tracker: &SettingsChangeTracker) -> Vec<SettingItem> {
    let working = tracker.working();
    let changes = tracker.get_changes();
    let item = |field: SettingsField| {
        SettingItem::new(field)
            .value(working.get(field).into())
            .modified(changes.contains(field))
    };

    vec![
        // ─────────────────────────────────────────────────────────
        // Profile Section
        // ─────────────────────────────────────────────────────────
        item(SettingsField::Name)
            .description("Managed by your account")
            .section("Profile"),
        item(SettingsField::Email)
            .description("Managed by your account")
            .section("Profile"),
        item(SettingsField::Slug)
            .description("Lowercase letters, numbers and hyphens; used in your public URL")
            .section("Profile"),
        // ─────────────────────────────────────────────────────────
        // Chatbot Section
        // ─────────────────────────────────────────────────────────
        item(SettingsField::ChatbotTitle)
            .description("Heading visitors see on the chat page")
            .section("Chatbot"),
        item(SettingsField::ChatbotDescription)
            .description("Short text under the chat heading")
            .section("Chatbot"),
        // ─────────────────────────────────────────────────────────
        // Publishing Section
        // ─────────────────────────────────────────────────────────
        item(SettingsField::IsPublished)
            .description("Make the chatbot reachable at its public URL")
            .section("Publishing")
            .disabled(working.slug.is_empty()),
    ]
}

/// The row under the settings cursor
pub fn get_selected_item(
    tracker: &SettingsChangeTracker,
    selected_index: usize,
) -> Option<SettingItem> {
    settings_items(tracker).into_iter().nth(selected_index)
}
