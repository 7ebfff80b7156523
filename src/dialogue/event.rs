//! User actions fed into the dialogue.

use serde::{Deserialize, Serialize};

use super::model::{IdType, UserType};

/// A button the dialogue can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    New,
    Existing,
    Ssn,
    Tribal,
}

impl Choice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "🆕 New",
            Self::Existing => "👤 Existing",
            Self::Ssn => "SSN",
            Self::Tribal => "Tribal ID",
        }
    }

    pub fn user_type(&self) -> Option<UserType> {
        match self {
            Self::New => Some(UserType::New),
            Self::Existing => Some(UserType::Existing),
            Self::Ssn | Self::Tribal => None,
        }
    }

    pub fn id_type(&self) -> Option<IdType> {
        match self {
            Self::Ssn => Some(IdType::Ssn),
            Self::Tribal => Some(IdType::Tribal),
            Self::New | Self::Existing => None,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Existing => write!(f, "existing"),
            Self::Ssn => write!(f, "ssn"),
            Self::Tribal => write!(f, "tribal"),
        }
    }
}

/// One user action. Each is handled by exactly one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The conversation view was opened (first render or after a reset).
    Opened,
    ButtonClicked(Choice),
    FormSubmitted(String),
    FileUploaded { name: String, data: Vec<u8> },
    ResetRequested,
}

impl Event {
    /// Short description for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Opened => "open".to_string(),
            Self::ButtonClicked(choice) => format!("button '{choice}'"),
            Self::FormSubmitted(_) => "text submission".to_string(),
            Self::FileUploaded { name, .. } => format!("upload '{name}'"),
            Self::ResetRequested => "reset".to_string(),
        }
    }
}
