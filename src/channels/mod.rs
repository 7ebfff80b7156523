//! Presentation channels — front ends that draw the dialogue and turn user
//! actions into events.

pub mod cli;
pub mod http;

use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tracing::info;

use crate::dialogue::{DialogueController, Event, Message, View, render};
use crate::error::{ChannelError, TransitionError};

pub use cli::CliChannel;
pub use http::{AppState, dialogue_routes};

/// Stream of user actions coming from a channel.
pub type EventStream = Pin<Box<dyn Stream<Item = Event> + Send>>;

/// A front end driven by a stream of user actions.
#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;

    /// Start reading user input.
    async fn start(&self) -> Result<EventStream, ChannelError>;

    /// Draw the state after an event; `emitted` holds the messages that event
    /// appended.
    async fn render(&self, view: &View, emitted: &[Message]) -> Result<(), ChannelError>;

    /// Tell the user an action was refused.
    async fn reject(&self, error: &TransitionError) -> Result<(), ChannelError>;
}

/// Run one conversation over `channel` until its input ends.
pub async fn run_channel(
    channel: &dyn Channel,
    controller: &mut DialogueController,
) -> Result<(), ChannelError> {
    let mut events = channel.start().await?;
    info!(channel = channel.name(), "Channel started");

    let greeting = controller.open();
    channel.render(&render(controller.session()), &greeting).await?;

    while let Some(event) = events.next().await {
        let result = match event {
            Event::ResetRequested => Ok(controller.reset()),
            event => controller.handle(event),
        };
        match result {
            Ok(emitted) => channel.render(&render(controller.session()), &emitted).await?,
            Err(e) => channel.reject(&e).await?,
        }
    }

    info!(channel = channel.name(), "Channel input closed");
    Ok(())
}
