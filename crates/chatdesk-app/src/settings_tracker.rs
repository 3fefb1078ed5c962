//! Working copy vs. saved baseline of the company settings form.
//!
//! The diff is never stored. [`SettingsChangeTracker::get_changes`]
//! recomputes it on every call by comparing the two snapshots field by field.

use std::collections::BTreeSet;

use chatdesk_core::prelude::*;
use chatdesk_core::Company;

/// Description shown to visitors when the company never set one
pub const DEFAULT_CHATBOT_DESCRIPTION: &str = "Get help with our services and products";

/// Fields of the settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingsField {
    Name,
    Email,
    Slug,
    ChatbotTitle,
    ChatbotDescription,
    IsPublished,
}

impl SettingsField {
    pub const ALL: [SettingsField; 6] = [
        SettingsField::Name,
        SettingsField::Email,
        SettingsField::Slug,
        SettingsField::ChatbotTitle,
        SettingsField::ChatbotDescription,
        SettingsField::IsPublished,
    ];

    /// Name and email come from the account and cannot be edited here
    pub fn is_editable(self) -> bool {
        !matches!(self, SettingsField::Name | SettingsField::Email)
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Name => "Company Name",
            SettingsField::Email => "Email",
            SettingsField::Slug => "Company Slug",
            SettingsField::ChatbotTitle => "Chatbot Title",
            SettingsField::ChatbotDescription => "Chatbot Description",
            SettingsField::IsPublished => "Published",
        }
    }
}

/// Value of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// One snapshot of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub name: String,
    pub email: String,
    pub slug: String,
    pub chatbot_title: String,
    pub chatbot_description: String,
    pub is_published: bool,
}

impl SettingsForm {
    /// Map the remote record, filling the display fallbacks
    pub fn from_company(company: &Company) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());

        Self {
            name: company.name.clone(),
            email: company.email.clone(),
            slug: company.slug.clone().unwrap_or_default(),
            chatbot_title: non_empty(&company.chatbot_title)
                .unwrap_or_else(|| company.name.clone()),
            chatbot_description: non_empty(&company.chatbot_description)
                .unwrap_or_else(|| DEFAULT_CHATBOT_DESCRIPTION.to_string()),
            is_published: company.is_published.unwrap_or(false),
        }
    }

    pub fn get(&self, field: SettingsField) -> FieldValue {
        match field {
            SettingsField::Name => FieldValue::Text(self.name.clone()),
            SettingsField::Email => FieldValue::Text(self.email.clone()),
            SettingsField::Slug => FieldValue::Text(self.slug.clone()),
            SettingsField::ChatbotTitle => FieldValue::Text(self.chatbot_title.clone()),
            SettingsField::ChatbotDescription => {
                FieldValue::Text(self.chatbot_description.clone())
            }
            SettingsField::IsPublished => FieldValue::Flag(self.is_published),
        }
    }

    fn differs(&self, other: &SettingsForm, field: SettingsField) -> bool {
        match field {
            SettingsField::Name => self.name != other.name,
            SettingsField::Email => self.email != other.email,
            SettingsField::Slug => self.slug != other.slug,
            SettingsField::ChatbotTitle => self.chatbot_title != other.chatbot_title,
            SettingsField::ChatbotDescription => {
                self.chatbot_description != other.chatbot_description
            }
            SettingsField::IsPublished => self.is_published != other.is_published,
        }
    }
}

/// Derived diff between working copy and baseline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsChanges {
    pub has_changes: bool,
    pub changed_fields: BTreeSet<SettingsField>,
}

impl SettingsChanges {
    pub fn contains(&self, field: SettingsField) -> bool {
        self.changed_fields.contains(&field)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsChangeTracker {
    working: SettingsForm,
    baseline: SettingsForm,
}

impl SettingsChangeTracker {
    pub fn new(form: SettingsForm) -> Self {
        Self {
            working: form.clone(),
            baseline: form,
        }
    }

    pub fn from_company(company: &Company) -> Self {
        Self::new(SettingsForm::from_company(company))
    }

    pub fn working(&self) -> &SettingsForm {
        &self.working
    }

    pub fn baseline(&self) -> &SettingsForm {
        &self.baseline
    }

    /// Change exactly one field of the working copy
    pub fn update_field(&mut self, field: SettingsField, value: FieldValue) -> Result<()> {
        if !field.is_editable() {
            return Err(Error::settings(format!("{} is read-only", field.label())));
        }

        let form = &mut self.working;
        match (field, value) {
            (SettingsField::Slug, FieldValue::Text(v)) => form.slug = v,
            (SettingsField::ChatbotTitle, FieldValue::Text(v)) => form.chatbot_title = v,
            (SettingsField::ChatbotDescription, FieldValue::Text(v)) => {
                form.chatbot_description = v
            }
            (SettingsField::IsPublished, FieldValue::Flag(v)) => form.is_published = v,
            (field, value) => {
                return Err(Error::settings(format!(
                    "{} cannot be set to {:?}",
                    field.label(),
                    value
                )))
            }
        }
        Ok(())
    }

    pub fn get_changes(&self) -> SettingsChanges {
        let changed_fields: BTreeSet<SettingsField> = SettingsField::ALL
            .into_iter()
            .filter(|field| self.working.differs(&self.baseline, *field))
            .collect();

        SettingsChanges {
            has_changes: !changed_fields.is_empty(),
            changed_fields,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.working != self.baseline
    }

    /// Discard edits
    pub fn reset_changes(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Commit edits as the new reference point. Local bookkeeping only.
    pub fn mark_as_saved(&mut self) {
        self.baseline = self.working.clone();
    }

    /// The remote record changed: both snapshots follow it and unsaved
    /// edits are dropped.
    pub fn replace_from_remote(&mut self, company: &Company) {
        if self.has_changes() {
            debug!("Remote company record replaced unsaved settings edits");
        }
        let form = SettingsForm::from_company(company);
        self.working = form.clone();
        self.baseline = form;
    }
}
