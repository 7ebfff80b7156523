//! Dialogue steps — tracks where the user is in the enrollment conversation.

use serde::{Deserialize, Serialize};

/// The steps of the enrollment conversation.
///
/// Progresses linearly: Start → AskIdType → AwaitingId → AwaitingPhoto, then
/// either AwaitingConfirmation or AwaitingProviderSwitch (duplicate found),
/// and finally Done. A reset returns to Start from anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Start,
    AskIdType,
    AwaitingId,
    AwaitingPhoto,
    AwaitingConfirmation,
    AwaitingProviderSwitch,
    Done,
}

impl Step {
    /// Every step, in conversation order.
    pub const ALL: [Step; 7] = [
        Step::Start,
        Step::AskIdType,
        Step::AwaitingId,
        Step::AwaitingPhoto,
        Step::AwaitingConfirmation,
        Step::AwaitingProviderSwitch,
        Step::Done,
    ];

    /// Check if a transition from `self` to `target` is valid.
    ///
    /// Self-transitions are allowed where a step re-prompts (invalid ID,
    /// unclear confirmation, input after completion). Reset is not an edge
    /// here; it discards the session rather than moving it.
    pub fn can_transition_to(&self, target: Step) -> bool {
        use Step::*;
        matches!(
            (self, target),
            (Start, Start)
                | (Start, AskIdType)
                | (AskIdType, AwaitingId)
                | (AwaitingId, AwaitingId)
                | (AwaitingId, AwaitingPhoto)
                | (AwaitingPhoto, AwaitingConfirmation)
                | (AwaitingPhoto, AwaitingProviderSwitch)
                | (AwaitingConfirmation, AwaitingConfirmation)
                | (AwaitingConfirmation, Done)
                | (AwaitingProviderSwitch, Done)
                | (Done, Done)
        )
    }

    /// Whether the conversation is finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Whether this step takes free text through the single-line form.
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            Self::AwaitingId | Self::AwaitingConfirmation | Self::AwaitingProviderSwitch | Self::Done
        )
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::AskIdType => "ask_id_type",
            Self::AwaitingId => "awaiting_id",
            Self::AwaitingPhoto => "awaiting_photo",
            Self::AwaitingConfirmation => "awaiting_confirmation",
            Self::AwaitingProviderSwitch => "awaiting_provider_switch",
            Self::Done => "done",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Step {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.to_string() == s)
            .ok_or_else(|| format!("Unknown step: {}", s))
    }
}
