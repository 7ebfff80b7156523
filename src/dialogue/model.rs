//! Session and chat message data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::Step;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

impl Sender {
    pub fn avatar(&self) -> &'static str {
        match self {
            Self::Bot => "🤖",
            Self::User => "🧑",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bot => write!(f, "Bot"),
            Self::User => write!(f, "User"),
        }
    }
}

/// A single chat bubble. Never edited once appended to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sent_at: Utc::now(),
        }
    }
}

/// Whether the applicant is new or already enrolled somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    New,
    Existing,
}

/// Which identity document the applicant enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    Ssn,
    Tribal,
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ssn => write!(f, "ssn"),
            Self::Tribal => write!(f, "tribal"),
        }
    }
}

/// File extensions the photo picker accepts.
pub const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Whether `name` carries one of the accepted photo extensions (any case).
pub fn is_accepted_photo(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| PHOTO_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// An uploaded photo: original file name plus raw bytes.
///
/// The content is never inspected; only the name takes part in the
/// duplicate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub name: String,
    pub data: Vec<u8>,
}

/// Full state of one user's conversation.
///
/// Owned by a single controller; every field returns to its default on reset.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub step: Step,
    pub user_type: Option<UserType>,
    pub id_type: Option<IdType>,
    pub user_id: Option<String>,
    pub photo_uploaded: bool,
    pub photo_name: Option<String>,
    #[serde(skip)]
    pub photo_data: Option<Vec<u8>>,
    pub confirmed: bool,
    pub duplicate: bool,
    pub chat_history: Vec<Message>,
    /// Completion percentage shown in the progress bar, 0–100.
    pub progress: u8,
    /// Whether the greeting has been appended since the last reset.
    pub welcome_shown: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::default(),
            user_type: None,
            id_type: None,
            user_id: None,
            photo_uploaded: false,
            photo_name: None,
            photo_data: None,
            confirmed: false,
            duplicate: false,
            chat_history: Vec::new(),
            progress: 0,
            welcome_shown: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the history.
    pub fn push(&mut self, message: Message) {
        self.chat_history.push(message);
    }

    /// Store an uploaded photo's metadata and bytes.
    pub fn attach_photo(&mut self, photo: Photo) {
        self.photo_uploaded = true;
        self.photo_name = Some(photo.name);
        self.photo_data = Some(photo.data);
    }

    /// Clear every field back to its default. The session id is kept so
    /// front ends can keep addressing the same conversation.
    pub fn reset(&mut self) {
        *self = Self {
            id: self.id,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_has_expected_values() {
        let s = Session::new();
        assert_eq!(s.step, Step::Start);
        assert!(s.user_type.is_none());
        assert!(s.id_type.is_none());
        assert!(s.user_id.is_none());
        assert!(!s.photo_uploaded);
        assert!(s.photo_name.is_none());
        assert!(s.photo_data.is_none());
        assert!(!s.confirmed);
        assert!(!s.duplicate);
        assert!(s.chat_history.is_empty());
        assert_eq!(s.progress, 0);
        assert!(!s.welcome_shown);
    }

    #[test]
    fn reset_restores_defaults_and_keeps_id() {
        let mut s = Session::new();
        let id = s.id;
        s.step = Step::Done;
        s.user_type = Some(UserType::Existing);
        s.id_type = Some(IdType::Tribal);
        s.user_id = Some("12345".to_string());
        s.attach_photo(Photo {
            name: "me.png".to_string(),
            data: vec![1, 2, 3],
        });
        s.confirmed = true;
        s.duplicate = true;
        s.progress = 60;
        s.welcome_shown = true;
        s.push(Message::bot("hello"));

        s.reset();

        assert_eq!(s.id, id);
        assert_eq!(s.step, Step::Start);
        assert!(s.user_type.is_none());
        assert!(s.id_type.is_none());
        assert!(s.user_id.is_none());
        assert!(!s.photo_uploaded);
        assert!(s.photo_name.is_none());
        assert!(s.photo_data.is_none());
        assert!(!s.confirmed);
        assert!(!s.duplicate);
        assert!(s.chat_history.is_empty());
        assert_eq!(s.progress, 0);
        assert!(!s.welcome_shown);
    }

    #[test]
    fn accepted_photo_extensions() {
        assert!(is_accepted_photo("jane.png"));
        assert!(is_accepted_photo("PASSPORT.PNG"));
        assert!(is_accepted_photo("selfie.jpg"));
        assert!(is_accepted_photo("selfie.final.JPEG"));
        assert!(!is_accepted_photo("scan.pdf"));
        assert!(!is_accepted_photo("png"));
        assert!(!is_accepted_photo(""));
    }

    #[test]
    fn photo_data_is_not_serialized() {
        let mut s = Session::new();
        s.attach_photo(Photo {
            name: "jane.png".to_string(),
            data: vec![0xFF; 16],
        });
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["photo_name"], "jane.png");
        assert_eq!(json["photo_uploaded"], true);
        assert!(json.get("photo_data").is_none());
        assert_eq!(json["step"], "start");
    }

    #[test]
    fn message_constructors_tag_sender() {
        assert_eq!(Message::bot("hi").sender, Sender::Bot);
        assert_eq!(Message::user("hi").sender, Sender::User);
        assert_eq!(Sender::Bot.avatar(), "🤖");
        assert_eq!(Sender::User.to_string(), "User");
    }
}
