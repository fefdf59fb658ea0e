//! # mapache_core
//!
//! Agent runtime and workflow engine for the Mapache platform.
//!
//! This crate provides the agent abstraction, the registry that holds live
//! agents, and the workflow executor that drives multi-agent runs with
//! persistence and resume support.
//!
//! # Architecture
//!
//! - **Agents**: Units of work identified by id, executing tasks against a context
//! - **Registry**: Maps agent ids to implementations
//! - **Workflows**: Ordered sequences of steps, each handled by one agent
//! - **Executor**: Runs workflows with persisted, resumable execution logs
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mapache_core::{
//!     AgentRegistry, TaskContext, Workflow, WorkflowExecutor,
//! };
//!
//! let mut registry = AgentRegistry::new();
//! registry.register(Arc::new(MyAgent));
//!
//! let executor = WorkflowExecutor::new(Arc::new(registry));
//! let workflow = Workflow::new("sync", "Data Sync")
//!     .step("agent_512")
//!     .step("agent_700");
//!
//! let context = TaskContext::new(workspace_path).with_task("sync contacts");
//! let log = executor.execute(&workflow, context).await?;
//! ```

pub mod agent;
pub mod context;
pub mod error;
pub mod executor;
pub mod registry;
pub mod workflow;

pub use agent::{Agent, Capability, LogEntry, LogLevel, TaskResult};
pub use context::TaskContext;
pub use error::{CoreError, CoreResult};
pub use executor::{ExecutionLog, ExecutionLogEntry, ExecutionState, WorkflowExecutor};
pub use registry::AgentRegistry;
pub use workflow::{Workflow, WorkflowStep};
