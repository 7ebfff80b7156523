//! Lifeline Assist — guided ACP/Lifeline enrollment dialogue.

pub mod app;
pub mod channels;
pub mod config;
pub mod dialogue;
pub mod error;
