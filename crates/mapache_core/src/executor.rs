//! Workflow executor with persistence and resume support.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::agent::TaskResult;
use crate::context::TaskContext;
use crate::error::{CoreError, CoreResult};
use crate::registry::AgentRegistry;
use crate::workflow::Workflow;

/// Execution state of a workflow run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    /// Workflow has not started
    #[default]
    Pending,
    /// Workflow is currently running
    Running,
    /// Workflow completed successfully
    Completed,
    /// Workflow failed at a step
    Failed,
    /// Workflow was cancelled
    Cancelled,
}

/// Execution log entry for one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionLogEntry {
    pub agent: String,
    pub result: TaskResult,
}

/// Persistent execution log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionLog {
    /// Workflow ID
    pub workflow_id: String,
    /// Workflow name
    pub workflow_name: String,
    /// Execution state
    pub state: ExecutionState,
    /// Index of the current/last step executed
    pub current_step_index: usize,
    /// Ordered list of agent ids in the workflow
    pub steps: Vec<String>,
    /// Results from each step execution
    pub results: Vec<ExecutionLogEntry>,
    /// When execution started
    pub started_at: Option<chrono::DateTime<Utc>>,
    /// When execution completed/failed
    pub completed_at: Option<chrono::DateTime<Utc>>,
    /// Error message if failed
    pub error: Option<String>,
    /// Task context snapshot
    pub context: TaskContext,
}

impl ExecutionLog {
    /// Create a new execution log.
    pub fn new(
        workflow_id: impl Into<String>,
        workflow_name: impl Into<String>,
        steps: Vec<String>,
        context: TaskContext,
    ) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            workflow_name: workflow_name.into(),
            state: ExecutionState::Pending,
            current_step_index: 0,
            steps,
            results: Vec::new(),
            started_at: None,
            completed_at: None,
            error: None,
            context,
        }
    }

    /// Get the log file path for this execution.
    pub fn log_path(&self) -> PathBuf {
        self.context
            .logs_path()
            .join(format!("{}.json", self.workflow_id))
    }

    /// Save the log to disk.
    pub fn save(&self) -> CoreResult<()> {
        let path = self.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        fs::write(&path, json)?;
        debug!("Saved execution log to {:?}", path);
        Ok(())
    }

    /// Load a log from disk.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let log: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        Ok(log)
    }

    /// Get the failed step's agent id (if any).
    pub fn failed_step(&self) -> Option<&str> {
        if self.state == ExecutionState::Failed {
            self.steps.get(self.current_step_index).map(|s| s.as_str())
        } else {
            None
        }
    }

    /// Check if the workflow can be resumed.
    pub fn can_resume(&self) -> bool {
        self.state == ExecutionState::Failed && self.current_step_index < self.steps.len()
    }
}

/// Workflow executor with persistence support.
pub struct WorkflowExecutor {
    registry: Arc<AgentRegistry>,
}

impl WorkflowExecutor {
    /// Create a new executor with the given registry.
    pub fn new(registry: Arc<AgentRegistry>) -> Self {
        Self { registry }
    }

    /// Execute a workflow.
    ///
    /// This will execute all steps in order, stopping on failure.
    /// The execution log is persisted after each step.
    pub async fn execute(
        &self,
        workflow: &Workflow,
        context: TaskContext,
    ) -> CoreResult<ExecutionLog> {
        let step_agents: Vec<String> = workflow.steps.iter().map(|s| s.agent.clone()).collect();

        let mut log = ExecutionLog::new(&workflow.id, &workflow.name, step_agents, context);

        self.run_from(&mut log, 0).await?;
        Ok(log)
    }

    /// Resume a failed workflow from the failed step.
    ///
    /// The execution log must be in a Failed state to be resumed.
    pub async fn resume(&self, mut log: ExecutionLog) -> CoreResult<ExecutionLog> {
        if !log.can_resume() {
            return Err(CoreError::InvalidState(format!(
                "Workflow {} is not in a resumable state (state={:?})",
                log.workflow_id, log.state
            )));
        }

        let start_index = log.current_step_index;
        info!(
            "Resuming workflow {} from step {} (index {})",
            log.workflow_name,
            log.steps.get(start_index).map(|s| s.as_str()).unwrap_or("unknown"),
            start_index
        );

        // Clear the error since we're retrying
        log.error = None;

        self.run_from(&mut log, start_index).await?;
        Ok(log)
    }

    /// Run the workflow from a specific step index.
    async fn run_from(&self, log: &mut ExecutionLog, start_index: usize) -> CoreResult<()> {
        log.state = ExecutionState::Running;
        if log.started_at.is_none() {
            log.started_at = Some(Utc::now());
        }

        info!("Starting workflow: {} ({})", log.workflow_name, log.workflow_id);

        for i in start_index..log.steps.len() {
            let agent_id = log.steps[i].clone();
            log.current_step_index = i;

            // Get the agent from registry
            let agent = match self.registry.get(&agent_id) {
                Some(a) => a,
                None => {
                    let err_msg = format!("Agent '{}' not found in registry", agent_id);
                    error!("{}", err_msg);
                    log.state = ExecutionState::Failed;
                    log.error = Some(err_msg);
                    log.completed_at = Some(Utc::now());
                    log.save()?;
                    return Err(CoreError::AgentNotFound(agent_id));
                }
            };

            info!("Executing step [{}/{}]: {}", i + 1, log.steps.len(), agent_id);

            // Execute the agent
            let result = match agent.execute(&mut log.context).await {
                Ok(result) => result,
                Err(e) => {
                    let err_msg = format!("Agent '{}' execution error: {}", agent_id, e);
                    error!("{}", err_msg);

                    let result = TaskResult::failure(&agent_id, e.to_string());
                    log.results.push(ExecutionLogEntry {
                        agent: agent_id.clone(),
                        result,
                    });
                    log.state = ExecutionState::Failed;
                    log.error = Some(err_msg);
                    log.completed_at = Some(Utc::now());
                    log.save()?;
                    return Err(CoreError::StepExecutionFailed {
                        agent: agent_id,
                        message: e.to_string(),
                    });
                }
            };

            // Record the result
            let success = result.success;
            let message = result.message.clone();
            log.results.push(ExecutionLogEntry {
                agent: agent_id.clone(),
                result,
            });

            // Persist after each step
            log.save()?;

            if !success {
                let err_msg = message.unwrap_or_else(|| "Step failed".to_string());
                error!("Step '{}' failed: {}", agent_id, err_msg);
                log.state = ExecutionState::Failed;
                log.error = Some(err_msg.clone());
                log.completed_at = Some(Utc::now());
                log.save()?;
                return Err(CoreError::StepExecutionFailed {
                    agent: agent_id,
                    message: err_msg,
                });
            }

            info!("Step '{}' completed successfully", agent_id);
        }

        log.state = ExecutionState::Completed;
        log.completed_at = Some(Utc::now());
        log.save()?;

        info!("Workflow '{}' completed successfully", log.workflow_name);
        Ok(())
    }

    /// Find the most recent execution log for a workflow.
    pub fn find_latest_log(
        &self,
        workspace_path: &Path,
        workflow_id: &str,
    ) -> CoreResult<Option<ExecutionLog>> {
        let logs_dir = workspace_path.join(".mapache").join("logs");
        if !logs_dir.exists() {
            return Ok(None);
        }

        let log_path = logs_dir.join(format!("{}.json", workflow_id));
        if log_path.exists() {
            Ok(Some(ExecutionLog::load(&log_path)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Agent, TaskResult};
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct SuccessAgent {
        id: String,
    }

    #[async_trait]
    impl Agent for SuccessAgent {
        fn agent_id(&self) -> String {
            self.id.clone()
        }

        fn role(&self) -> String {
            "Success Specialist".to_string()
        }

        fn description(&self) -> String {
            "An agent that always succeeds".to_string()
        }

        async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
            context.set_output(self.id.clone(), serde_json::json!("ok"));
            Ok(TaskResult::success(&self.id))
        }
    }

    struct FailingAgent {
        id: String,
    }

    #[async_trait]
    impl Agent for FailingAgent {
        fn agent_id(&self) -> String {
            self.id.clone()
        }

        fn role(&self) -> String {
            "Failure Specialist".to_string()
        }

        fn description(&self) -> String {
            "An agent that always fails".to_string()
        }

        async fn execute(&self, _context: &mut TaskContext) -> CoreResult<TaskResult> {
            Ok(TaskResult::failure(&self.id, "Intentional failure"))
        }
    }

    fn registry(ids: &[&str]) -> Arc<AgentRegistry> {
        let mut registry = AgentRegistry::new();
        for id in ids {
            registry.register(Arc::new(SuccessAgent { id: id.to_string() }));
        }
        Arc::new(registry)
    }

    #[tokio::test]
    async fn test_workflow_execution_success() {
        let temp_dir = TempDir::new().unwrap();
        let executor = WorkflowExecutor::new(registry(&["a", "b", "c"]));

        let workflow = Workflow::new("test-workflow", "Test Workflow")
            .step("a")
            .step("b")
            .step("c");

        let context = TaskContext::new(temp_dir.path());
        let log = executor.execute(&workflow, context).await.unwrap();

        assert_eq!(log.state, ExecutionState::Completed);
        assert_eq!(log.results.len(), 3);
        assert!(log.error.is_none());
        // Outputs from every step accumulated in the context snapshot
        assert_eq!(log.context.outputs.len(), 3);
    }

    #[tokio::test]
    async fn test_workflow_execution_failure_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(SuccessAgent { id: "a".to_string() }));
        registry.register(Arc::new(FailingAgent { id: "b".to_string() }));
        registry.register(Arc::new(SuccessAgent { id: "c".to_string() }));
        let executor = WorkflowExecutor::new(Arc::new(registry));

        let workflow = Workflow::new("test-workflow", "Test Workflow")
            .step("a")
            .step("b")
            .step("c");

        let context = TaskContext::new(temp_dir.path());
        let result = executor.execute(&workflow, context).await;
        assert!(result.is_err());

        // Load the persisted log to check state
        let log_path = temp_dir
            .path()
            .join(".mapache")
            .join("logs")
            .join("test-workflow.json");
        let log = ExecutionLog::load(&log_path).unwrap();

        assert_eq!(log.state, ExecutionState::Failed);
        assert_eq!(log.current_step_index, 1);
        assert!(log.can_resume());
        assert_eq!(log.failed_step(), Some("b"));
        // Step "c" never ran
        assert_eq!(log.results.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_agent_fails_workflow() {
        let temp_dir = TempDir::new().unwrap();
        let executor = WorkflowExecutor::new(registry(&["a"]));

        let workflow = Workflow::new("test-workflow", "Test Workflow")
            .step("a")
            .step("ghost");

        let context = TaskContext::new(temp_dir.path());
        let err = executor.execute(&workflow, context).await.unwrap_err();
        assert!(matches!(err, CoreError::AgentNotFound(_)));
    }

    #[tokio::test]
    async fn test_resume_after_failure() {
        let temp_dir = TempDir::new().unwrap();

        // First run: step "b" fails
        let mut failing = AgentRegistry::new();
        failing.register(Arc::new(SuccessAgent { id: "a".to_string() }));
        failing.register(Arc::new(FailingAgent { id: "b".to_string() }));
        let executor = WorkflowExecutor::new(Arc::new(failing));

        let workflow = Workflow::new("resumable", "Resumable").step("a").step("b");
        let context = TaskContext::new(temp_dir.path());
        assert!(executor.execute(&workflow, context).await.is_err());

        let log = executor
            .find_latest_log(temp_dir.path(), "resumable")
            .unwrap()
            .unwrap();
        assert!(log.can_resume());

        // Second run: "b" now succeeds; resume picks up at the failed step
        let executor = WorkflowExecutor::new(registry(&["a", "b"]));
        let resumed = executor.resume(log).await.unwrap();

        assert_eq!(resumed.state, ExecutionState::Completed);
        // "a" ran once, "b" ran twice (failed then succeeded)
        assert_eq!(resumed.results.len(), 3);
    }

    #[tokio::test]
    async fn test_resume_rejects_completed_log() {
        let temp_dir = TempDir::new().unwrap();
        let executor = WorkflowExecutor::new(registry(&["a"]));

        let workflow = Workflow::new("done", "Done").step("a");
        let context = TaskContext::new(temp_dir.path());
        let log = executor.execute(&workflow, context).await.unwrap();

        let err = executor.resume(log).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidState(_)));
    }
}
