//! Catalog-backed SaaS integration agent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use mapache_catalog::{AgentSpec, Catalog};
use mapache_core::{Agent, Capability, CoreResult, TaskContext, TaskResult};

use crate::error::AgentResult;

/// Runtime configuration snapshot for an agent.
///
/// Field names are part of the external contract: `mapache show` and the
/// execution logs serialize this record as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    pub agent_id: String,
    pub role: String,
    pub tier: String,
    pub category: String,
    pub api_endpoint: String,
    pub mcp_available: bool,
}

/// A SaaS integration agent backed by a catalog spec.
///
/// All integrations share this one implementation; behavior that differs
/// per product lives in the spec data, not in code.
#[derive(Debug, Clone)]
pub struct SaasAgent {
    spec: AgentSpec,
}

impl SaasAgent {
    /// Create an agent from a spec.
    pub fn new(spec: AgentSpec) -> Self {
        Self { spec }
    }

    /// Look up a slug in a catalog and wrap the matching spec.
    pub fn from_catalog(catalog: &Catalog, slug: &str) -> AgentResult<Self> {
        let spec = catalog.get_required(slug)?;
        Ok(Self::new(spec.clone()))
    }

    /// The underlying catalog spec.
    pub fn spec(&self) -> &AgentSpec {
        &self.spec
    }

    /// Configuration snapshot for this agent.
    pub fn config(&self) -> AgentConfig {
        AgentConfig {
            agent_id: self.spec.agent_id(),
            role: self.spec.role(),
            tier: self.spec.tier.label().to_string(),
            category: self.spec.category.clone(),
            api_endpoint: self.spec.base_url.clone(),
            mcp_available: self.spec.has_mcp_server,
        }
    }

    /// Message reported when executing a concrete task.
    fn executing_message(&self, task: &str) -> String {
        format!("{} Agent executing: {}", self.spec.name, task)
    }

    /// Message reported when no task is given.
    fn ready_message(&self) -> String {
        format!("{} Agent ready for operations", self.spec.name)
    }
}

#[async_trait]
impl Agent for SaasAgent {
    fn agent_id(&self) -> String {
        self.spec.agent_id()
    }

    fn role(&self) -> String {
        self.spec.role()
    }

    fn description(&self) -> String {
        format!(
            "Expert agent for {} operations ({})",
            self.spec.name, self.spec.category
        )
    }

    fn capabilities(&self) -> Vec<Capability> {
        Capability::all()
    }

    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
        // A blank task is treated the same as no task at all.
        let task = context
            .task
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let message = match task {
            Some(task) => self.executing_message(task),
            None => self.ready_message(),
        };

        info!(agent = %self.spec.agent_id(), "{}", message);
        context.set_output(self.spec.agent_id(), json!(message));

        Ok(TaskResult::success(self.spec.agent_id()).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapache_catalog::Tier;

    fn spec() -> AgentSpec {
        AgentSpec {
            id: 1306,
            slug: "abas_erp".to_string(),
            name: "abas ERP".to_string(),
            tier: Tier::SpecializedVertical,
            category: "manufacturing".to_string(),
            api_key_env: "ABAS_ERP_API_KEY".to_string(),
            base_url: "https://api.abaserp.com".to_string(),
            has_mcp_server: false,
            docs_url: None,
        }
    }

    #[test]
    fn test_identity_from_spec() {
        let agent = SaasAgent::new(spec());
        assert_eq!(agent.agent_id(), "agent_1306");
        assert_eq!(agent.role(), "abas ERP Specialist");
        assert_eq!(agent.capabilities().len(), 6);
    }

    #[test]
    fn test_config_snapshot() {
        let agent = SaasAgent::new(spec());
        let config = agent.config();

        assert_eq!(config.agent_id, "agent_1306");
        assert_eq!(config.tier, "Specialized Vertical Tools");
        assert_eq!(config.category, "manufacturing");
        assert_eq!(config.api_endpoint, "https://api.abaserp.com");
        assert!(!config.mcp_available);

        let encoded = serde_json::to_value(&config).unwrap();
        assert_eq!(encoded["api_endpoint"], "https://api.abaserp.com");
        assert_eq!(encoded["mcp_available"], false);
    }

    #[tokio::test]
    async fn test_execute_with_task() {
        let agent = SaasAgent::new(spec());
        let mut ctx = TaskContext::new("/tmp").with_task("sync production orders");

        let result = agent.execute(&mut ctx).await.unwrap();
        assert!(result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("abas ERP Agent executing: sync production orders")
        );
        assert_eq!(
            ctx.get_output::<String>("agent_1306").as_deref(),
            Some("abas ERP Agent executing: sync production orders")
        );
    }

    #[tokio::test]
    async fn test_execute_without_task() {
        let agent = SaasAgent::new(spec());
        let mut ctx = TaskContext::new("/tmp");

        let result = agent.execute(&mut ctx).await.unwrap();
        assert_eq!(
            result.message.as_deref(),
            Some("abas ERP Agent ready for operations")
        );
    }

    #[tokio::test]
    async fn test_blank_task_means_ready() {
        let agent = SaasAgent::new(spec());
        let mut ctx = TaskContext::new("/tmp").with_task("   ");

        let result = agent.execute(&mut ctx).await.unwrap();
        assert_eq!(
            result.message.as_deref(),
            Some("abas ERP Agent ready for operations")
        );
    }

    #[test]
    fn test_unknown_slug_errors() {
        let catalog = Catalog::builtin().unwrap();
        let err = SaasAgent::from_catalog(&catalog, "not_a_product").unwrap_err();
        assert!(err.to_string().contains("not_a_product"));
    }
}
