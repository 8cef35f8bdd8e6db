use rn_core::ChannelKind;

use serde::{Deserialize, Serialize};

/// One parsed inbound command from the channel collaborator.
///
/// Mention stripping and mention-to-identifier resolution happen in the
/// adapter before this struct is built; the dispatcher never sees raw
/// platform message segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    pub actor_id: String,
    #[serde(default)]
    pub target_ref: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    pub channel_kind: ChannelKind,
}
