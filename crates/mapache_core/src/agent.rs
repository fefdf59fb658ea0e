//! Agent trait and execution result types.
//!
//! Agents are the units of work in Mapache workflows. Each agent owns one
//! integration or coordination role, executes tasks against a mutable
//! context, and reports a result the executor records and persists.
//!
//! # Agent Lifecycle
//!
//! 1. **Registration**: Agents are registered with an [`AgentRegistry`] by id.
//! 2. **Lookup**: The [`WorkflowExecutor`] looks up agents by id when executing.
//! 3. **Execution**: The agent's `execute` method is called with a mutable context.
//! 4. **Result**: The agent returns a [`TaskResult`] indicating success or failure.
//!
//! [`AgentRegistry`]: crate::registry::AgentRegistry
//! [`WorkflowExecutor`]: crate::executor::WorkflowExecutor

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::TaskContext;
use crate::error::CoreResult;

/// Capability labels an agent can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ApiOperations,
    DataIntegration,
    WorkflowAutomation,
    RealTimeSync,
    ErrorMonitoring,
    SecurityManagement,
}

impl Capability {
    /// Human-readable capability label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ApiOperations => "API Operations",
            Capability::DataIntegration => "Data Integration",
            Capability::WorkflowAutomation => "Workflow Automation",
            Capability::RealTimeSync => "Real-time Synchronization",
            Capability::ErrorMonitoring => "Error Monitoring",
            Capability::SecurityManagement => "Security Management",
        }
    }

    /// The full capability set advertised by catalog integration agents.
    pub fn all() -> Vec<Self> {
        vec![
            Capability::ApiOperations,
            Capability::DataIntegration,
            Capability::WorkflowAutomation,
            Capability::RealTimeSync,
            Capability::ErrorMonitoring,
            Capability::SecurityManagement,
        ]
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result from agent execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub agent_id: String,
    pub success: bool,
    pub message: Option<String>,
    pub logs: Vec<LogEntry>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl TaskResult {
    pub fn success(agent_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            agent_id: agent_id.into(),
            success: true,
            message: None,
            logs: Vec::new(),
            started_at: now,
            completed_at: now,
        }
    }

    pub fn failure(agent_id: impl Into<String>, message: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            agent_id: agent_id.into(),
            success: false,
            message: Some(message.into()),
            logs: Vec::new(),
            started_at: now,
            completed_at: now,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_log(mut self, entry: LogEntry) -> Self {
        self.logs.push(entry);
        self
    }
}

/// A log entry recorded during agent execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Trait for agent implementations.
///
/// Agents must be `Send + Sync` so a registry can be shared across
/// concurrent workflow executions.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Unique agent identifier, e.g. `agent_512`.
    ///
    /// This is used to look up the agent in the registry and must match
    /// the id used in workflow step definitions.
    fn agent_id(&self) -> String;

    /// Human-readable role label, e.g. "Microsoft Teams Specialist".
    fn role(&self) -> String;

    /// One-line description of what the agent does.
    fn description(&self) -> String;

    /// Capabilities this agent advertises.
    ///
    /// Default: none.
    fn capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    /// Execute a task.
    ///
    /// The context is mutable to allow agents to:
    /// - Set output values for subsequent steps
    /// - Update metadata
    /// - Read inputs recorded by earlier steps
    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult>;
}
