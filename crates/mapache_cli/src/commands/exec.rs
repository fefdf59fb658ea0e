//! Exec command - Execute a task against one agent.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use mapache_agents::SaasAgent;
use mapache_catalog::Catalog;
use mapache_core::{AgentRegistry, TaskContext, Workflow, WorkflowExecutor};

#[derive(Args)]
pub struct ExecArgs {
    /// Agent slug, e.g. "microsoft_teams"
    slug: String,

    /// Task to execute
    #[arg(short, long)]
    task: Option<String>,
}

pub async fn execute(args: ExecArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let agent = SaasAgent::from_catalog(&catalog, &args.slug)?;
    let agent_id = mapache_core::Agent::agent_id(&agent);

    info!("Executing {} ({})", args.slug, agent_id);

    let mut registry = AgentRegistry::new();
    registry.register(Arc::new(agent));
    let executor = WorkflowExecutor::new(Arc::new(registry));

    let workflow = Workflow::new(format!("exec-{}", args.slug), "Single Agent Execution")
        .step(agent_id);

    let mut context = TaskContext::new(std::env::current_dir()?);
    if let Some(task) = args.task {
        context = context.with_task(task);
    }

    let log = executor.execute(&workflow, context).await?;

    for entry in &log.results {
        if let Some(message) = &entry.result.message {
            println!("{}", message);
        }
    }

    Ok(())
}
