//! Inbound webhook payload types.
//!
//! Every field is optional on the wire; the field mapper resolves absent
//! values through its defaulting table. Admission only rejects bodies that
//! are not a JSON object at all.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One webhook delivery describing a spoken-assistant call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallPayload {
    #[serde(default)]
    pub message: CallMessage,
}

/// The call transcript envelope inside a payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallMessage {
    #[serde(default)]
    pub nexa_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub connection_type: Option<String>,
    #[serde(default)]
    pub requested_to: Option<String>,
    #[serde(default)]
    pub analysis: CallAnalysis,
    #[serde(default)]
    pub artifact: CallArtifact,
}

/// Post-call analysis produced by the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallAnalysis {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Raw call artifacts, of which only the transcript lines are consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallArtifact {
    #[serde(default)]
    pub messages: Vec<TranscriptLine>,
}

/// One ordered line of the call transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptLine {
    #[serde(default)]
    pub message: String,
}

impl CallPayload {
    /// Admit a raw webhook body.
    ///
    /// A body that is not a JSON object is refused with
    /// [`Error::InvalidPayload`] rather than mapped onto defaults. An object
    /// with absent fields is always admitted.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidPayload(
                "webhook body is not a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| Error::InvalidPayload(e.to_string()))
    }
}
