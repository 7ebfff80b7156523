//! Dialogue controller — the transition function and the session owner that
//! applies it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::TransitionError;

use super::event::{Choice, Event};
use super::model::{Message, Photo, Session, is_accepted_photo};
use super::prompts;
use super::records::RecordStore;
use super::state::Step;
use super::validate::validate_id;

/// Progress shown once a valid ID has been entered.
pub const PROGRESS_ID_CONFIRMED: u8 = 60;

/// Outcome of one event: the next session and the messages it appended.
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: Session,
    pub emitted: Vec<Message>,
}

/// Compute the session that follows `event`.
///
/// Pure: `session` is not modified. Rejected events return an error and
/// imply no change at all; in particular no user echo is appended.
pub fn transition(
    session: &Session,
    records: &dyn RecordStore,
    event: Event,
) -> Result<Transition, TransitionError> {
    let mut next = session.clone();
    let before = next.chat_history.len();

    match (session.step, event) {
        (_, Event::ResetRequested) => {
            next.reset();
            return Ok(Transition {
                session: next,
                emitted: Vec::new(),
            });
        }

        (_, Event::Opened) => return Ok(greet(session)),

        (Step::Start, Event::ButtonClicked(choice @ (Choice::New | Choice::Existing))) => {
            if let Some(user_type) = choice.user_type() {
                next.push(Message::user(prompts::user_type_selected(user_type)));
                next.push(Message::bot(prompts::ASK_ID_TYPE));
            }
            next.user_type = choice.user_type();
            next.step = Step::AskIdType;
        }

        (Step::AskIdType, Event::ButtonClicked(choice @ (Choice::Ssn | Choice::Tribal))) => {
            if let Some(id_type) = choice.id_type() {
                next.push(Message::user(prompts::id_type_selected(id_type)));
                next.push(Message::bot(prompts::ask_id(id_type)));
            }
            next.id_type = choice.id_type();
            next.step = Step::AwaitingId;
        }

        (step, Event::FormSubmitted(text)) if step.accepts_text() => {
            if text.is_empty() {
                return Err(TransitionError::EmptySubmission);
            }
            next.push(Message::user(text.clone()));
            reply(&mut next, &text);
        }

        (Step::AwaitingPhoto, Event::FileUploaded { name, data }) => {
            if name.is_empty() {
                return Err(TransitionError::EmptySubmission);
            }
            if !is_accepted_photo(&name) {
                return Err(TransitionError::UnsupportedPhoto { name });
            }
            next.push(Message::user(prompts::photo_submitted(&name)));
            receive_photo(&mut next, records, Photo { name, data });
        }

        (step, event) => {
            return Err(TransitionError::NotOffered {
                step,
                event: event.describe(),
            });
        }
    }

    debug_assert!(
        next.step == session.step || session.step.can_transition_to(next.step),
        "illegal transition {} -> {}",
        session.step,
        next.step
    );

    let emitted = next.chat_history[before..].to_vec();
    Ok(Transition {
        session: next,
        emitted,
    })
}

/// Render pass: greets a fresh session once, otherwise changes nothing.
///
/// Accepted in every step, so it cannot fail.
pub fn greet(session: &Session) -> Transition {
    let mut next = session.clone();
    let mut emitted = Vec::new();
    if next.step == Step::Start && !next.welcome_shown {
        next.welcome_shown = true;
        for text in [prompts::GREETING, prompts::ASK_USER_TYPE] {
            let message = Message::bot(text);
            next.push(message.clone());
            emitted.push(message);
        }
    }
    Transition {
        session: next,
        emitted,
    }
}

/// Bot reply to a text submission in a text-taking step.
fn reply(session: &mut Session, text: &str) {
    match session.step {
        Step::AwaitingId => {
            if validate_id(session.id_type, text) {
                session.user_id = Some(text.to_string());
                session.step = Step::AwaitingPhoto;
                session.progress = PROGRESS_ID_CONFIRMED;
                session.push(Message::bot(prompts::ID_CONFIRMED));
            } else {
                session.push(Message::bot(prompts::ID_INVALID));
            }
        }
        Step::AwaitingConfirmation => {
            let answer = text.to_lowercase();
            if answer.contains("yes") {
                session.confirmed = true;
                session.step = Step::Done;
                session.push(Message::bot(prompts::SUBMITTED));
                session.push(Message::bot(prompts::PROCESSING_TIME));
            } else if answer.contains("no") {
                session.push(Message::bot(prompts::NOT_READY));
            } else {
                session.push(Message::bot(prompts::ASK_YES_NO));
            }
        }
        Step::AwaitingProviderSwitch => {
            session.step = Step::Done;
            session.push(Message::bot(prompts::PROVIDER_SWITCH));
        }
        Step::Done => {
            session.push(Message::bot(prompts::CLOSING));
        }
        Step::Start | Step::AskIdType | Step::AwaitingPhoto => {}
    }
}

/// Store the photo, then route on the duplicate check.
fn receive_photo(session: &mut Session, records: &dyn RecordStore, photo: Photo) {
    let name = photo.name.clone();
    session.attach_photo(photo);
    session.push(Message::bot(prompts::photo_uploaded(&name)));

    let duplicate = session
        .user_id
        .as_deref()
        .and_then(|user_id| records.find_duplicate(user_id, &name));

    if duplicate.is_some() {
        session.duplicate = true;
        session.step = Step::AwaitingProviderSwitch;
        session.push(Message::bot(prompts::DUPLICATE_DETECTED));
        session.push(Message::bot(prompts::ASK_PROVIDER_SWITCH));
    } else {
        session.step = Step::AwaitingConfirmation;
        session.push(Message::bot(prompts::NO_DUPLICATE));
    }
}

/// Owns one session and applies events to it in place.
pub struct DialogueController {
    session: Session,
    records: Arc<dyn RecordStore>,
}

impl DialogueController {
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self {
            session: Session::new(),
            records,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step
    }

    /// Apply one event. On error the session is left exactly as it was.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Message>, TransitionError> {
        let from = self.session.step;
        let description = event.describe();
        match transition(&self.session, self.records.as_ref(), event) {
            Ok(Transition { session, emitted }) => {
                if session.step != from {
                    info!(session_id = %session.id, from = %from, to = %session.step, "Dialogue step changed");
                } else {
                    debug!(session_id = %session.id, step = %from, event = %description, "Dialogue re-prompted");
                }
                self.session = session;
                Ok(emitted)
            }
            Err(e) => {
                warn!(session_id = %self.session.id, step = %from, error = %e, "Event rejected");
                Err(e)
            }
        }
    }

    /// Render pass: greet a fresh session. Returns the greeting, or nothing
    /// when it was already shown.
    pub fn open(&mut self) -> Vec<Message> {
        let Transition { session, emitted } = greet(&self.session);
        if !emitted.is_empty() {
            debug!(session_id = %session.id, "Greeting shown");
        }
        self.session = session;
        emitted
    }

    /// Clear the session and show the greeting again.
    pub fn reset(&mut self) -> Vec<Message> {
        info!(session_id = %self.session.id, step = %self.session.step, "Session reset");
        self.session.reset();
        self.open()
    }
}
