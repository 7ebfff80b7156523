//! Fixed bot and user message texts for the enrollment dialogue.

use super::model::{IdType, UserType};

pub const PAGE_TITLE: &str = "ACP/Lifeline Assistant";
pub const SIDEBAR_TEXT: &str = "Welcome to our ACP/Lifeline application assistant. For further help, please chat with our virtual assistant";

pub const GREETING: &str = "Hi there! 👋 I’m here to help you apply for ACP or Lifeline.";
pub const ASK_USER_TYPE: &str = "Are you a new user or an existing user?";
pub const ASK_ID_TYPE: &str = "What type of ID will you use?";

pub const ID_CONFIRMED: &str = "✅ ID confirmed. Now please upload your photo for verification.";
pub const ID_INVALID: &str =
    "⚠️ Please enter a valid SSN (e.g., 123-45-6789) or Tribal ID (at least 5 digits).";

pub const DUPLICATE_DETECTED: &str = "⚠️ Duplicate detected: You are already registered.";
pub const ASK_PROVIDER_SWITCH: &str = "Would you like to switch providers instead? (yes/no)";
pub const NO_DUPLICATE: &str =
    "✅ No duplicate found. Do you want to submit your details to NLAD? (yes/no)";

pub const SUBMITTED: &str = "✅ Details sent to NLAD.";
pub const PROCESSING_TIME: &str = "📅 Most applications are processed in 1–2 business days.";
pub const NOT_READY: &str = "Okay! Let me know when you're ready to proceed.";
pub const ASK_YES_NO: &str = "Please respond with 'yes' or 'no'.";
pub const PROVIDER_SWITCH: &str = "Thanks! We'll help you switch your provider soon.";
pub const CLOSING: &str = "🙏 Thank you for using the assistant. Have a great day!";

/// User echo for the new/existing buttons.
pub fn user_type_selected(user_type: UserType) -> &'static str {
    match user_type {
        UserType::New => "New user selected.",
        UserType::Existing => "Existing user selected.",
    }
}

/// User echo for the ID type buttons.
pub fn id_type_selected(id_type: IdType) -> &'static str {
    match id_type {
        IdType::Ssn => "SSN selected.",
        IdType::Tribal => "Tribal ID selected.",
    }
}

/// Bot prompt asking for the ID number.
pub fn ask_id(id_type: IdType) -> &'static str {
    match id_type {
        IdType::Ssn => "You selected SSN. Please enter your SSN (e.g., 123-45-6789).",
        IdType::Tribal => "You selected Tribal ID. Please enter your ID (at least 5 digits).",
    }
}

/// User echo for a photo upload.
pub fn photo_submitted(name: &str) -> String {
    format!("[Uploaded: {name}]")
}

/// Bot acknowledgement for a photo upload.
pub fn photo_uploaded(name: &str) -> String {
    format!("📸 Photo '{name}' uploaded successfully!")
}
