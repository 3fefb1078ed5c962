//! Wire types shared with the chatbot backend.
//!
//! Field names (`slug`, `chatbot_title`, `chatbot_description`,
//! `is_published`) match the backend API verbatim.

use serde::{Deserialize, Serialize};

/// Authoritative company record as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Opaque backend id; string or number depending on the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub chatbot_title: Option<String>,
    #[serde(default)]
    pub chatbot_description: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

impl Company {
    /// The slug if set and non-empty
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

/// Partial settings update. Only changed fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchUpdateSettingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatbot_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatbot_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

impl BatchUpdateSettingsRequest {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.chatbot_title.is_none()
            && self.chatbot_description.is_none()
            && self.is_published.is_none()
    }
}

/// Response of `PUT /auth/company/settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchUpdateSettingsResponse {
    #[serde(default)]
    pub message: String,
    pub company: Company,
}

/// Body of `POST /knowledge-base/upload-text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextUploadRequest {
    pub content: String,
    pub filename: String,
}

/// What the backend tells us about an accepted upload.
///
/// The backend shape varies between versions, so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "document_id")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub filename: Option<String>,
}
