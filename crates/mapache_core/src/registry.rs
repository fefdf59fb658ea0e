//! Agent registry for managing live agent implementations.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::agent::{Agent, Capability};
use crate::error::{CoreError, CoreResult};

/// A registry of agent implementations.
///
/// The registry maps agent ids to their implementations, allowing dynamic
/// lookup during workflow execution.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn Agent>>,
}

impl AgentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }

    /// Register an agent under its `agent_id()`.
    ///
    /// If an agent with the same id already exists, it will be replaced.
    pub fn register(&mut self, agent: Arc<dyn Agent>) {
        let id = agent.agent_id();
        debug!("Registering agent: {}", id);
        self.agents.insert(id, agent);
    }

    /// Register an agent under a custom id.
    pub fn register_as(&mut self, id: impl Into<String>, agent: Arc<dyn Agent>) {
        let id = id.into();
        debug!("Registering agent as: {}", id);
        self.agents.insert(id, agent);
    }

    /// Get an agent by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(id).cloned()
    }

    /// Get an agent by id, returning an error if not found.
    pub fn get_required(&self, id: &str) -> CoreResult<Arc<dyn Agent>> {
        self.get(id)
            .ok_or_else(|| CoreError::AgentNotFound(id.to_string()))
    }

    /// Check if an agent is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    /// Get all registered agent ids.
    pub fn ids(&self) -> Vec<&str> {
        self.agents.keys().map(|s| s.as_str()).collect()
    }

    /// Get all agents advertising a capability.
    pub fn with_capability(&self, capability: Capability) -> Vec<Arc<dyn Agent>> {
        self.agents
            .values()
            .filter(|a| a.capabilities().contains(&capability))
            .cloned()
            .collect()
    }

    /// Get the number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Remove an agent from the registry.
    pub fn unregister(&mut self, id: &str) -> Option<Arc<dyn Agent>> {
        debug!("Unregistering agent: {}", id);
        self.agents.remove(id)
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("agents", &self.agents.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::TaskResult;
    use crate::context::TaskContext;
    use async_trait::async_trait;

    struct TestAgent {
        id: String,
    }

    #[async_trait]
    impl Agent for TestAgent {
        fn agent_id(&self) -> String {
            self.id.clone()
        }

        fn role(&self) -> String {
            "Test Specialist".to_string()
        }

        fn description(&self) -> String {
            "Test agent".to_string()
        }

        fn capabilities(&self) -> Vec<Capability> {
            vec![Capability::ApiOperations]
        }

        async fn execute(&self, _context: &mut TaskContext) -> CoreResult<TaskResult> {
            Ok(TaskResult::success(&self.id))
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = AgentRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(TestAgent {
            id: "agent_512".to_string(),
        }));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("agent_512"));
        assert_eq!(registry.get("agent_512").unwrap().agent_id(), "agent_512");
        assert!(registry.get("agent_999").is_none());
    }

    #[test]
    fn test_get_required_missing() {
        let registry = AgentRegistry::new();
        let err = registry.get_required("agent_999").err().unwrap();
        assert!(matches!(err, CoreError::AgentNotFound(_)));
    }

    #[test]
    fn test_capability_filter() {
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(TestAgent {
            id: "agent_512".to_string(),
        }));

        assert_eq!(registry.with_capability(Capability::ApiOperations).len(), 1);
        assert!(registry
            .with_capability(Capability::SecurityManagement)
            .is_empty());
    }

    #[test]
    fn test_unregister() {
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(TestAgent {
            id: "agent_512".to_string(),
        }));

        assert!(registry.unregister("agent_512").is_some());
        assert!(!registry.contains("agent_512"));
    }
}
