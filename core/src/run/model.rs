use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event type tags as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    RunStarted,
    ToolCall,
    ToolResult,
    RunFinished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub ts: f64,

    #[serde(rename = "type")]
    pub event_type: EventType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for RunEvent {
    fn default() -> Self {
        Self {
            ts: 0.0,
            event_type: EventType::RunStarted,
            run_id: None,
            tool: None,
            call_id: None,
            args: None,
            result: None,
            status: None,
        }
    }
}

/// One simulated session: identifier, opaque caller payloads, and the
/// event history the simulator rebuilds on every replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub run_id: String,
    pub created_at: f64,

    #[serde(default)]
    pub config: Value,

    #[serde(default)]
    pub task: Value,

    #[serde(default)]
    pub events: Vec<RunEvent>,
}

/// Unix seconds with sub-second precision. Display-grade only.
pub(crate) fn now_ts() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
