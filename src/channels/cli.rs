//! CLI channel — stdin/stdout REPL for the enrollment dialogue.

use std::path::Path;

use async_trait::async_trait;
use futures::stream;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::channels::{Channel, EventStream};
use crate::dialogue::{Choice, Event, Message, View, Widget};
use crate::error::{ChannelError, TransitionError};

const PROGRESS_WIDTH: usize = 20;

/// A line of terminal input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Event(Event),
    /// `/upload <path>`; the file still has to be read.
    Upload(String),
    Quit,
    Help,
}

/// Interpret one trimmed input line. Blank lines yield nothing.
pub fn parse_line(line: &str) -> Option<CliCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let command = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let parsed = match command {
        ("/new", "") => CliCommand::Event(Event::ButtonClicked(Choice::New)),
        ("/existing", "") => CliCommand::Event(Event::ButtonClicked(Choice::Existing)),
        ("/ssn", "") => CliCommand::Event(Event::ButtonClicked(Choice::Ssn)),
        ("/tribal", "") => CliCommand::Event(Event::ButtonClicked(Choice::Tribal)),
        ("/reset", "") => CliCommand::Event(Event::ResetRequested),
        ("/quit", "") | ("/exit", "") => CliCommand::Quit,
        ("/help", "") => CliCommand::Help,
        ("/upload", path) if !path.is_empty() => CliCommand::Upload(path.to_string()),
        _ => CliCommand::Event(Event::FormSubmitted(line.to_string())),
    };
    Some(parsed)
}

/// `[████████░░░░] 60%`
pub fn progress_bar(progress: u8) -> String {
    let progress = progress.min(100) as usize;
    let filled = progress * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled),
        progress
    )
}

fn format_message(message: &Message) -> String {
    format!("{} {}: {}", message.sender.avatar(), message.sender, message.text)
}

fn widget_hint(widget: &Widget) -> String {
    match widget {
        Widget::Buttons { choices } => {
            let options: Vec<String> = choices
                .iter()
                .map(|c| format!("/{c} ({})", c.label()))
                .collect();
            format!("Choose: {}", options.join("  "))
        }
        Widget::TextForm { label } => format!("{label} (type and press Enter)"),
        Widget::FilePicker { label, extensions } => {
            format!("{label}: /upload <path> ({})", extensions.join(", "))
        }
        Widget::Closed { .. } => "Conversation complete. /reset to start over.".to_string(),
    }
}

/// Text drawn after an event: new messages, progress, photo, input hint.
pub fn format_frame(view: &View, emitted: &[Message]) -> String {
    let mut lines: Vec<String> = emitted.iter().map(format_message).collect();
    let photo_just_uploaded = emitted.iter().any(|m| m.text.starts_with("📸"));
    if let (true, Some(photo)) = (photo_just_uploaded, &view.photo) {
        lines.push(format!("   🖼  {} ({}, {} bytes)", photo.caption, photo.name, photo.size_bytes));
    }
    lines.push(progress_bar(view.progress));
    lines.push(widget_hint(&view.widget));
    lines.join("\n")
}

const HELP: &str = "\
Commands:
  /new, /existing      choose user type
  /ssn, /tribal        choose ID type
  /upload <path>       upload a photo (jpg, jpeg, png)
  /reset               start over
  /quit                exit
Anything else is sent as your answer.";

/// Read a photo from disk into an upload event.
pub async fn read_upload(path: &str) -> Result<Event, ChannelError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| ChannelError::UploadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok(Event::FileUploaded { name, data })
}

/// A CLI channel that reads from stdin and writes to stdout.
pub struct CliChannel;

impl CliChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    async fn start(&self) -> Result<EventStream, ChannelError> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let event = match parse_line(&line) {
                            None => {
                                eprint!("> ");
                                continue;
                            }
                            Some(CliCommand::Quit) => break,
                            Some(CliCommand::Help) => {
                                println!("{HELP}");
                                eprint!("> ");
                                continue;
                            }
                            Some(CliCommand::Upload(path)) => match read_upload(&path).await {
                                Ok(event) => event,
                                Err(e) => {
                                    eprintln!("❌ {}", e);
                                    eprint!("> ");
                                    continue;
                                }
                            },
                            Some(CliCommand::Event(event)) => event,
                        };
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        tracing::error!("Error reading stdin: {}", e);
                        break;
                    }
                }
            }
        });

        let stream = stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|event| (event, rx))
        });

        Ok(Box::pin(stream))
    }

    async fn render(&self, view: &View, emitted: &[Message]) -> Result<(), ChannelError> {
        // Fresh conversation: the frame holds the whole history
        if emitted.len() == view.history.len() {
            println!("\n== {} ==", view.title);
            println!("{}", view.sidebar);
        }
        println!("\n{}\n", format_frame(view, emitted));
        eprint!("> ");
        Ok(())
    }

    async fn reject(&self, error: &TransitionError) -> Result<(), ChannelError> {
        eprintln!("⚠️  {}", error);
        eprint!("> ");
        Ok(())
    }
}
