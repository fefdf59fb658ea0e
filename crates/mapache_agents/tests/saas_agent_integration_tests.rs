//! Integration tests running catalog agents through the workflow executor.

use std::sync::Arc;

use mapache_agents::{roster, SaasAgent};
use mapache_catalog::Catalog;
use mapache_core::{
    Agent, Capability, ExecutionState, TaskContext, Workflow, WorkflowExecutor,
};

#[test]
fn test_agent_initialization_from_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let agent = SaasAgent::from_catalog(&catalog, "abas_erp").unwrap();

    assert_eq!(agent.agent_id(), "agent_1306");
    assert_eq!(agent.role(), "abas ERP Specialist");
    assert_eq!(agent.config().tier, "Specialized Vertical Tools");
    assert_eq!(agent.config().category, "manufacturing");
}

#[test]
fn test_agent_capabilities() {
    let catalog = Catalog::builtin().unwrap();
    let agent = SaasAgent::from_catalog(&catalog, "microsoft_teams").unwrap();

    let capabilities = agent.capabilities();
    assert!(!capabilities.is_empty());
    assert!(capabilities.contains(&Capability::ApiOperations));
    let labels: Vec<_> = capabilities.iter().map(|c| c.as_str()).collect();
    assert!(labels.contains(&"API Operations"));
}

#[tokio::test]
async fn test_agent_execute_echoes_task() {
    let catalog = Catalog::builtin().unwrap();
    let agent = SaasAgent::from_catalog(&catalog, "abas_erp").unwrap();

    let mut ctx = TaskContext::new("/tmp").with_task("test task");
    let result = agent.execute(&mut ctx).await.unwrap();

    let message = result.message.unwrap();
    assert!(message.contains("abas ERP Agent executing"));
    assert!(message.contains("test task"));
}

#[tokio::test]
async fn test_roster_runs_through_executor() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin().unwrap();
    let registry = Arc::new(roster::build(&catalog));
    let executor = WorkflowExecutor::new(registry);

    let workflow = Workflow::new("crm-sync", "CRM Sync")
        .step("agent_512")
        .step("agent_1306");

    let context = TaskContext::new(temp_dir.path()).with_task("sync contacts");
    let log = executor.execute(&workflow, context).await.unwrap();

    assert_eq!(log.state, ExecutionState::Completed);
    assert_eq!(log.results.len(), 2);
    assert!(log.results[0]
        .result
        .message
        .as_deref()
        .unwrap()
        .contains("Microsoft Teams Agent executing: sync contacts"));

    // The execution log was persisted under the workspace
    let log_path = temp_dir
        .path()
        .join(".mapache")
        .join("logs")
        .join("crm-sync.json");
    assert!(log_path.exists());
}

#[test]
fn test_every_catalog_entry_builds_a_well_formed_agent() {
    let catalog = Catalog::builtin().unwrap();

    for spec in &catalog {
        let agent = SaasAgent::new(spec.clone());
        let config = agent.config();

        assert_eq!(config.agent_id, format!("agent_{}", spec.id));
        assert!(config.role.ends_with("Specialist"));
        assert!(!config.category.is_empty());
        assert!(config.api_endpoint.starts_with("http"));
    }
}
