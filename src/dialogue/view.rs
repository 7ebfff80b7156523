//! Render description for front ends.
//!
//! Every render replays the full history, then shows the progress bar, the
//! uploaded photo (if any) and whatever input the current step offers.

use serde::Serialize;

use super::event::Choice;
use super::model::{Message, PHOTO_EXTENSIONS, Session};
use super::prompts;
use super::state::Step;

/// The input a step offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Buttons { choices: Vec<Choice> },
    TextForm { label: &'static str },
    FilePicker { label: &'static str, extensions: Vec<&'static str> },
    /// Conversation finished; text is still accepted and answered.
    Closed { label: &'static str },
}

/// Metadata of the uploaded photo shown under the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoPreview {
    pub name: String,
    pub size_bytes: usize,
    pub caption: &'static str,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub title: &'static str,
    pub sidebar: &'static str,
    pub step: Step,
    pub progress: u8,
    pub history: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoPreview>,
    pub widget: Widget,
}

/// The widget offered in `step`.
pub fn widget_for(step: Step) -> Widget {
    if step.is_terminal() {
        return Widget::Closed {
            label: "Your response:",
        };
    }
    match step {
        Step::Start => Widget::Buttons {
            choices: vec![Choice::New, Choice::Existing],
        },
        Step::AskIdType => Widget::Buttons {
            choices: vec![Choice::Ssn, Choice::Tribal],
        },
        Step::AwaitingId => Widget::TextForm {
            label: "Enter your ID:",
        },
        Step::AwaitingPhoto => Widget::FilePicker {
            label: "Upload your photo",
            extensions: PHOTO_EXTENSIONS.to_vec(),
        },
        Step::AwaitingConfirmation | Step::AwaitingProviderSwitch | Step::Done => Widget::TextForm {
            label: "Your response:",
        },
    }
}

/// Build the full view of `session`.
pub fn render(session: &Session) -> View {
    let photo = match (&session.photo_name, &session.photo_data) {
        (Some(name), Some(data)) if session.photo_uploaded => Some(PhotoPreview {
            name: name.clone(),
            size_bytes: data.len(),
            caption: "Uploaded Photo",
        }),
        _ => None,
    };

    View {
        title: prompts::PAGE_TITLE,
        sidebar: prompts::SIDEBAR_TEXT,
        step: session.step,
        progress: session.progress.min(100),
        history: session.chat_history.clone(),
        photo,
        widget: widget_for(session.step),
    }
}
