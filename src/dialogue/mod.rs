//! Enrollment dialogue — the guided ACP/Lifeline application conversation.
//!
//! A fixed state machine walks the user through choosing new/existing,
//! choosing an ID type, entering the ID, uploading a photo, the duplicate
//! check against prior registrations, and final confirmation. Front ends
//! feed it `Event`s and draw the `View` it renders.

pub mod controller;
pub mod event;
pub mod model;
pub mod prompts;
pub mod records;
pub mod state;
pub mod validate;
pub mod view;

#[cfg(test)]
mod proptests;

pub use controller::{DialogueController, Transition, transition};
pub use event::{Choice, Event};
pub use model::{IdType, Message, Photo, Sender, Session, UserType};
pub use records::{Record, RecordStore, StaticRecordStore};
pub use state::Step;
pub use validate::validate_id;
pub use view::{View, Widget, render};
