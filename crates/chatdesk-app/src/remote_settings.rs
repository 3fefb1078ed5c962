//! Canonical company record and batch settings updates.

use chatdesk_core::{BatchUpdateSettingsRequest, Company, Error};

use crate::settings_tracker::{SettingsChangeTracker, SettingsField};

/// Fallback shown when a save failed without any usable message
pub const SAVE_FAILED_MESSAGE: &str = "Failed to update settings";

/// Company slice of the application state
#[derive(Debug, Clone, Default)]
pub struct CompanyState {
    /// Last record confirmed by the backend
    pub company: Option<Company>,
    /// A fetch is in flight
    pub loading: bool,
    /// A settings update is in flight
    pub saving: bool,
    /// Last fetch or save error
    pub error: Option<String>,
    /// `/<slug>` after a successful save with a slug
    pub public_url: Option<String>,
}

impl CompanyState {
    pub fn slug(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.slug())
    }

    pub fn set_loaded(&mut self, company: Company) {
        self.company = Some(company);
        self.loading = false;
        self.error = None;
    }

    pub fn set_load_failed(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
    }

    /// A save succeeded: the returned record becomes canonical
    pub fn apply_saved(&mut self, company: Company) {
        if let Some(slug) = company.slug() {
            self.public_url = Some(format!("/{}", slug));
        }
        self.company = Some(company);
        self.saving = false;
        self.error = None;
    }

    pub fn set_save_failed(&mut self, error: String) {
        self.saving = false;
        self.error = Some(error);
    }
}

/// Request carrying only the editable fields that changed.
///
/// Returns `None` when nothing editable changed.
pub fn build_update_request(tracker: &SettingsChangeTracker) -> Option<BatchUpdateSettingsRequest> {
    let changes = tracker.get_changes();
    let form = tracker.working();

    let mut request = BatchUpdateSettingsRequest::default();
    for field in changes.changed_fields {
        match field {
            SettingsField::Slug => request.slug = Some(form.slug.clone()),
            SettingsField::ChatbotTitle => request.chatbot_title = Some(form.chatbot_title.clone()),
            SettingsField::ChatbotDescription => {
                request.chatbot_description = Some(form.chatbot_description.clone())
            }
            SettingsField::IsPublished => request.is_published = Some(form.is_published),
            SettingsField::Name | SettingsField::Email => {}
        }
    }

    if request.is_empty() {
        None
    } else {
        Some(request)
    }
}

/// What to show when a settings save failed
pub fn save_failure_message(error: &Error) -> String {
    let message = error.user_message();
    if message.trim().is_empty() {
        SAVE_FAILED_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings_tracker::FieldValue;

    fn company() -> Company {
        Company {
            name: "Acme".into(),
            email: "ops@acme.test".into(),
            slug: Some("acme".into()),
            chatbot_title: Some("Acme Help".into()),
            chatbot_description: Some("Ask us anything".into()),
            is_published: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_contains_only_changed_fields() {
        let mut tracker = SettingsChangeTracker::from_company(&company());
        tracker
            .update_field(SettingsField::ChatbotTitle, FieldValue::Text("Acme Bot".into()))
            .unwrap();
        tracker
            .update_field(SettingsField::IsPublished, FieldValue::Flag(false))
            .unwrap();

        let request = build_update_request(&tracker).unwrap();
        assert_eq!(
            request,
            BatchUpdateSettingsRequest {
                chatbot_title: Some("Acme Bot".into()),
                is_published: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_no_changes_means_no_request() {
        let tracker = SettingsChangeTracker::from_company(&company());
        assert!(build_update_request(&tracker).is_none());
    }

    #[test]
    fn test_apply_saved_sets_public_url() {
        let mut state = CompanyState {
            saving: true,
            error: Some("old".into()),
            ..Default::default()
        };
        state.apply_saved(company());
        assert_eq!(state.public_url.as_deref(), Some("/acme"));
        assert!(!state.saving);
        assert!(state.error.is_none());
        assert_eq!(state.slug(), Some("acme"));
    }

    #[test]
    fn test_apply_saved_without_slug_keeps_previous_public_url() {
        let mut state = CompanyState {
            public_url: Some("/old".into()),
            ..Default::default()
        };
        state.apply_saved(Company {
            name: "Acme".into(),
            ..Default::default()
        });
        assert_eq!(state.public_url.as_deref(), Some("/old"));
        assert_eq!(state.company.as_ref().map(|c| c.name.as_str()), Some("Acme"));
    }

    #[test]
    fn test_failure_message_prefers_detail() {
        assert_eq!(
            save_failure_message(&Error::api(409, "Slug already taken")),
            "Slug already taken"
        );
        assert_eq!(save_failure_message(&Error::api(500, "")), SAVE_FAILED_MESSAGE);
        assert!(save_failure_message(&Error::http("connection refused"))
            .contains("connection refused"));
    }
}
