use serde_json::{json, Value};

use super::model::{now_ts, EventType, Run, RunEvent};

/// The only tool the simulator "executes".
pub const SIM_TOOL_NAME: &str = "echo";

/// Fallback for `task.input` when the caller supplied none.
pub const DEFAULT_TASK_INPUT: &str = "hello";

/// Rebuild `run.events` as the fixed four-event demo sequence:
/// `run_started`, `tool_call`, `tool_result`, `run_finished`.
///
/// Replay calls this again on the same run; everything except the
/// timestamps is derived from the run id and task payload, so two
/// simulations of one run are structurally identical.
pub fn simulate_run(run: &mut Run) {
    run.events.clear();

    run.events.push(RunEvent {
        ts: now_ts(),
        event_type: EventType::RunStarted,
        run_id: Some(run.run_id.clone()),
        ..Default::default()
    });

    let payload = run
        .task
        .get("input")
        .cloned()
        .unwrap_or_else(|| Value::String(DEFAULT_TASK_INPUT.to_string()));
    let call_id = derive_call_id(&run.run_id);

    run.events.push(RunEvent {
        ts: now_ts(),
        event_type: EventType::ToolCall,
        tool: Some(SIM_TOOL_NAME.to_string()),
        call_id: Some(call_id.clone()),
        args: Some(json!({ "text": payload })),
        ..Default::default()
    });

    run.events.push(RunEvent {
        ts: now_ts(),
        event_type: EventType::ToolResult,
        tool: Some(SIM_TOOL_NAME.to_string()),
        call_id: Some(call_id),
        result: Some(json!({ "text": payload, "length": text_len(&payload) })),
        ..Default::default()
    });

    run.events.push(RunEvent {
        ts: now_ts(),
        event_type: EventType::RunFinished,
        run_id: Some(run.run_id.clone()),
        status: Some("ok".to_string()),
        ..Default::default()
    });
}

/// Stable per-run call id: a fixed-length prefix of the run id with
/// hyphens stripped. Collision-free as long as run ids are.
fn derive_call_id(run_id: &str) -> String {
    let compact: String = run_id.chars().filter(|c| *c != '-').take(12).collect();
    format!("call_{compact}")
}

/// Character length of the payload's string form.
fn text_len(v: &Value) -> usize {
    match v {
        Value::String(s) => s.chars().count(),
        other => other.to_string().chars().count(),
    }
}
