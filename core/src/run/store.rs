use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use super::model::{now_ts, Run, RunEvent};
use super::simulate::simulate_run;
use crate::error::StoreError;

/// In-memory keyed store for all runs in the process.
///
/// Runs are never evicted; unbounded growth is an accepted limitation
/// of the demo harness. The lock makes concurrent create/replay of the
/// same run safe — mutation always happens under the write guard.
#[derive(Debug, Default)]
pub struct RunStore {
    runs: RwLock<HashMap<String, Run>>,
}

impl RunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty-events run with a fresh id. Never fails.
    pub fn create_run(&self, config: Value, task: Value) -> Run {
        let run = Run {
            run_id: Uuid::new_v4().to_string(),
            created_at: now_ts(),
            config,
            task,
            events: vec![],
        };

        let mut runs = self.runs.write().unwrap_or_else(|e| e.into_inner());
        runs.insert(run.run_id.clone(), run.clone());
        tracing::debug!(run_id = %run.run_id, "run created");
        run
    }

    pub fn get_run(&self, run_id: &str) -> Result<Run, StoreError> {
        let runs = self.runs.read().unwrap_or_else(|e| e.into_inner());
        runs.get(run_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(run_id.to_string()))
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        let runs = self.runs.read().unwrap_or_else(|e| e.into_inner());
        runs.contains_key(run_id)
    }

    pub fn list_events(&self, run_id: &str) -> Result<Vec<RunEvent>, StoreError> {
        Ok(self.get_run(run_id)?.events)
    }

    /// Re-run the simulator on a stored run and return the fresh event
    /// list. "Replay" rebuilds the sequence, it does not play back
    /// recorded history.
    pub fn simulate(&self, run_id: &str) -> Result<Vec<RunEvent>, StoreError> {
        let mut runs = self.runs.write().unwrap_or_else(|e| e.into_inner());
        let run = runs
            .get_mut(run_id)
            .ok_or_else(|| StoreError::NotFound(run_id.to_string()))?;
        simulate_run(run);
        tracing::debug!(run_id = %run_id, events = run.events.len(), "run simulated");
        Ok(run.events.clone())
    }

    pub fn len(&self) -> usize {
        let runs = self.runs.read().unwrap_or_else(|e| e.into_inner());
        runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_then_get_roundtrips() {
        let store = RunStore::new();
        let run = store.create_run(json!({"seed": 1}), json!({"input": "hi"}));

        let fetched = store.get_run(&run.run_id).unwrap();
        assert_eq!(fetched.run_id, run.run_id);
        assert_eq!(fetched.config, json!({"seed": 1}));
        assert_eq!(fetched.task, json!({"input": "hi"}));
        assert!(fetched.events.is_empty());
    }

    #[test]
    fn ids_are_unique_across_creates() {
        let store = RunStore::new();
        let a = store.create_run(json!({}), json!({}));
        let b = store.create_run(json!({}), json!({}));
        assert_ne!(a.run_id, b.run_id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = RunStore::new();
        assert!(!store.has_run("missing"));
        assert!(matches!(
            store.get_run("missing"),
            Err(StoreError::NotFound(id)) if id == "missing"
        ));
        assert!(matches!(
            store.list_events("missing"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.simulate("missing"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn simulate_populates_stored_run() {
        let store = RunStore::new();
        let run = store.create_run(json!({}), json!({"input": "hi"}));

        let events = store.simulate(&run.run_id).unwrap();
        assert_eq!(events.len(), 4);

        // The mutation is visible through subsequent lookups.
        let stored = store.list_events(&run.run_id).unwrap();
        assert_eq!(stored.len(), 4);
    }

    #[test]
    fn replay_is_structurally_stable() {
        let store = RunStore::new();
        let run = store.create_run(json!({}), json!({"input": "again"}));

        let first = store.simulate(&run.run_id).unwrap();
        let second = store.simulate(&run.run_id).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.event_type, b.event_type);
            assert_eq!(a.call_id, b.call_id);
            assert_eq!(a.args, b.args);
            assert_eq!(a.result, b.result);
        }
    }
}
