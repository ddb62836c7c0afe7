use std::collections::HashSet;

use serde_json::Value;

/// Outcome of a trace scan. `ok` is true exactly when `errors` is
/// empty; structural problems are diagnostics, never Rust errors.
/// The HTTP layer maps this into its own response DTO.
#[derive(Debug, Clone)]
pub struct TraceReport {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Validate a newline-delimited JSON trace in a single forward pass.
///
/// The one cross-record invariant is call/result pairing: every
/// `tool_call` with a usable `call_id` must be answered by a
/// `tool_result` under the same id. The converse is deliberately not
/// checked — a `tool_result` without a matching `tool_call` passes.
///
/// Per-line diagnostics come first in line order, then one
/// `missing tool_result for call_id=<id>` per unanswered call in the
/// order the calls were first seen. Duplicate ids on either side are
/// last-write-wins, not an error.
pub fn validate_trace_jsonl(text: &str) -> TraceReport {
    let mut errors: Vec<String> = Vec::new();

    let mut call_order: Vec<String> = Vec::new();
    let mut calls: HashSet<String> = HashSet::new();
    let mut results: HashSet<String> = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let i = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let obj = match serde_json::from_str::<Value>(line) {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!("line {i}: invalid json: {e}"));
                continue;
            }
        };

        let obj = match obj.as_object() {
            Some(map) => map,
            None => {
                errors.push(format!("line {i}: event must be an object"));
                continue;
            }
        };

        match obj.get("type").and_then(Value::as_str) {
            Some("tool_call") => match call_id_key(obj.get("call_id")) {
                Some(cid) => {
                    if calls.insert(cid.clone()) {
                        call_order.push(cid);
                    }
                }
                None => errors.push(format!("line {i}: tool_call missing call_id")),
            },
            Some("tool_result") => match call_id_key(obj.get("call_id")) {
                Some(cid) => {
                    results.insert(cid);
                }
                None => errors.push(format!("line {i}: tool_result missing call_id")),
            },
            // Unknown types are accepted and ignored.
            _ => {}
        }
    }

    for cid in &call_order {
        if !results.contains(cid) {
            errors.push(format!("missing tool_result for call_id={cid}"));
        }
    }

    TraceReport {
        ok: errors.is_empty(),
        errors,
    }
}

/// A usable `call_id` is any truthy value; its string form is the
/// pairing key. Null, `false`, `0`, `""` and empty containers count as
/// missing.
fn call_id_key(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Null => None,
        Value::Bool(b) => b.then(|| "true".to_string()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Value::Array(a) => (!a.is_empty()).then(|| Value::Array(a.clone()).to_string()),
        Value::Object(o) => (!o.is_empty()).then(|| Value::Object(o.clone()).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_ok() {
        let report = validate_trace_jsonl("");
        assert!(report.ok);
        assert_eq!(report.errors, Vec::<String>::new());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let report = validate_trace_jsonl("\n   \n\t\n");
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unanswered_call_is_reported() {
        let report = validate_trace_jsonl("{\"type\":\"tool_call\",\"call_id\":\"c1\"}\n");
        assert!(!report.ok);
        assert_eq!(
            report.errors,
            vec!["missing tool_result for call_id=c1".to_string()]
        );
    }

    #[test]
    fn matched_pair_is_ok() {
        let trace = "{\"type\":\"tool_call\",\"call_id\":\"c1\"}\n\
                     {\"type\":\"tool_result\",\"call_id\":\"c1\"}\n";
        let report = validate_trace_jsonl(trace);
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn invalid_json_is_a_diagnostic_not_a_failure() {
        let report = validate_trace_jsonl("not json\n");
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("line 1: invalid json:"));
    }

    #[test]
    fn scan_continues_past_bad_lines() {
        let trace = "garbage\n\
                     {\"type\":\"tool_call\",\"call_id\":\"c1\"}\n\
                     {\"type\":\"tool_result\",\"call_id\":\"c1\"}\n";
        let report = validate_trace_jsonl(trace);
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("line 1: invalid json:"));
    }

    #[test]
    fn non_object_line_is_reported() {
        let report = validate_trace_jsonl("\"42\"\n");
        assert!(!report.ok);
        assert_eq!(
            report.errors,
            vec!["line 1: event must be an object".to_string()]
        );
    }

    #[test]
    fn missing_call_id_messages_name_the_side() {
        let trace = "{\"type\":\"tool_call\"}\n\
                     {\"type\":\"tool_result\"}\n";
        let report = validate_trace_jsonl(trace);
        assert_eq!(
            report.errors,
            vec![
                "line 1: tool_call missing call_id".to_string(),
                "line 2: tool_result missing call_id".to_string(),
            ]
        );
    }

    #[test]
    fn falsy_call_id_counts_as_missing() {
        for cid in ["null", "\"\"", "0", "false", "[]", "{}"] {
            let trace = format!("{{\"type\":\"tool_call\",\"call_id\":{cid}}}\n");
            let report = validate_trace_jsonl(&trace);
            assert_eq!(
                report.errors,
                vec!["line 1: tool_call missing call_id".to_string()],
                "call_id={cid}"
            );
        }
    }

    #[test]
    fn orphan_result_is_accepted() {
        // Pairing is checked calls -> results only; the converse is
        // intentionally not enforced.
        let report = validate_trace_jsonl("{\"type\":\"tool_result\",\"call_id\":\"c9\"}\n");
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unknown_event_types_are_ignored() {
        let trace = "{\"type\":\"run_started\",\"run_id\":\"r1\"}\n\
                     {\"type\":\"custom_marker\"}\n\
                     {\"type\":\"run_finished\",\"status\":\"ok\"}\n";
        let report = validate_trace_jsonl(trace);
        assert!(report.ok);
    }

    #[test]
    fn duplicate_call_ids_overwrite_silently() {
        let trace = "{\"type\":\"tool_call\",\"call_id\":\"c1\"}\n\
                     {\"type\":\"tool_call\",\"call_id\":\"c1\"}\n\
                     {\"type\":\"tool_result\",\"call_id\":\"c1\"}\n";
        let report = validate_trace_jsonl(trace);
        assert!(report.ok);
    }

    #[test]
    fn missing_results_follow_call_order() {
        let trace = "{\"type\":\"tool_call\",\"call_id\":\"z9\"}\n\
                     {\"type\":\"tool_call\",\"call_id\":\"a1\"}\n";
        let report = validate_trace_jsonl(trace);
        assert_eq!(
            report.errors,
            vec![
                "missing tool_result for call_id=z9".to_string(),
                "missing tool_result for call_id=a1".to_string(),
            ]
        );
    }

    #[test]
    fn line_diagnostics_precede_pairing_diagnostics() {
        let trace = "{\"type\":\"tool_call\",\"call_id\":\"c1\"}\n\
                     not json\n";
        let report = validate_trace_jsonl(trace);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("line 2: invalid json:"));
        assert_eq!(report.errors[1], "missing tool_result for call_id=c1");
    }

    #[test]
    fn numeric_call_id_pairs_by_string_form() {
        let trace = "{\"type\":\"tool_call\",\"call_id\":7}\n\
                     {\"type\":\"tool_result\",\"call_id\":7}\n";
        let report = validate_trace_jsonl(trace);
        assert!(report.ok);
    }
}
