//! Task context containing execution parameters and accumulated state.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context passed through every step of a workflow execution.
///
/// Inputs are seeded by the caller; outputs accumulate as agents run.
/// Both are JSON values so arbitrary step payloads survive persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskContext {
    /// Unique execution ID
    pub execution_id: Uuid,
    /// Workspace root path (execution logs land under `.mapache/` here)
    pub workspace_path: PathBuf,
    /// Task description handed to the agents (if any)
    pub task: Option<String>,
    /// Environment variable overrides visible to agents
    pub env_vars: HashMap<String, String>,
    /// Input data seeded before execution
    pub inputs: HashMap<String, serde_json::Value>,
    /// Output data accumulated during execution
    pub outputs: HashMap<String, serde_json::Value>,
    /// Additional metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

impl TaskContext {
    /// Create a new task context rooted at a workspace path.
    pub fn new(workspace_path: impl Into<PathBuf>) -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            workspace_path: workspace_path.into(),
            task: None,
            env_vars: HashMap::new(),
            inputs: HashMap::new(),
            outputs: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Set the task description.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Add input data.
    pub fn with_input(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.inputs.insert(key.into(), value);
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Get an input value.
    pub fn get_input<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.inputs
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set an output value (used by agents).
    pub fn set_output(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.outputs.insert(key.into(), value);
    }

    /// Get an output value.
    pub fn get_output<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.outputs
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Directory where execution logs are persisted.
    pub fn logs_path(&self) -> PathBuf {
        self.workspace_path.join(".mapache").join("logs")
    }
}
