//! Workflow definitions.

use serde::{Deserialize, Serialize};

/// A step in a workflow, handled by one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Agent id (maps to registry)
    pub agent: String,
    /// Optional configuration for this step
    pub config: Option<serde_json::Value>,
}

impl WorkflowStep {
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }
}

impl<S: Into<String>> From<S> for WorkflowStep {
    fn from(agent: S) -> Self {
        Self::new(agent)
    }
}

/// A workflow definition: an ordered list of agent steps.
#[derive(Debug, Clone)]
pub struct Workflow {
    /// Unique workflow identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Ordered list of steps to execute
    pub steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// Create a new workflow.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            steps: Vec::new(),
        }
    }

    /// Add a description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add a step.
    pub fn step(mut self, step: impl Into<WorkflowStep>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Add multiple steps.
    pub fn steps(mut self, steps: impl IntoIterator<Item = impl Into<WorkflowStep>>) -> Self {
        for s in steps {
            self.steps.push(s.into());
        }
        self
    }
}
