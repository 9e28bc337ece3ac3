use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact message workflow status. Created as `New` by public submission;
/// later transitions happen in staff tooling outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "read" => ContactStatus::Read,
            "replied" => ContactStatus::Replied,
            _ => ContactStatus::New,
        }
    }
}

/// Contact message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, subject: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            subject,
            body,
            status: ContactStatus::New,
            created_at: Utc::now(),
        }
    }
}
