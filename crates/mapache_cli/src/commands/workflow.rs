//! Workflow command - Run a multi-agent workflow demonstration.

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use mapache_core::{TaskContext, WorkflowExecutor};

use crate::hiring;

#[derive(Args)]
pub struct WorkflowArgs {
    #[command(subcommand)]
    pub command: WorkflowCommands,
}

#[derive(Subcommand)]
pub enum WorkflowCommands {
    /// Run the hiring workflow: requisition through offer
    Hiring(HiringArgs),
}

#[derive(Args)]
pub struct HiringArgs {
    /// Job requisition title
    #[arg(short, long, default_value = "Senior Software Engineer")]
    requisition: String,
}

pub async fn execute(args: WorkflowArgs) -> Result<()> {
    match args.command {
        WorkflowCommands::Hiring(args) => run_hiring(args).await,
    }
}

async fn run_hiring(args: HiringArgs) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("Hiring Workflow - {}", args.requisition);
    println!("{}", "=".repeat(60));
    println!();

    let demo = hiring::build(&args.requisition).await;
    let executor = WorkflowExecutor::new(Arc::new(demo.registry));

    let context = TaskContext::new(std::env::current_dir()?);
    let log = executor.execute(&demo.workflow, context).await?;

    for (i, entry) in log.results.iter().enumerate() {
        println!(
            "Step {}: [{}] {}",
            i + 1,
            entry.agent,
            entry.result.message.as_deref().unwrap_or("done")
        );
    }

    println!();
    if let Some(interviews) = log.context.outputs.get("interviews") {
        println!("Interviews scheduled:");
        if let Some(list) = interviews.as_array() {
            for interview in list {
                println!(
                    "  - {}: {}",
                    interview["candidate"].as_str().unwrap_or("?"),
                    interview["slot"].as_str().unwrap_or("?")
                );
            }
        }
        println!();
    }

    let stats = demo.broker.stats().await;
    println!(
        "A2A messages: {} published, {} delivered, {} dead-lettered",
        stats.published, stats.delivered, stats.dead_lettered
    );

    info!("Execution log persisted to {}", log.log_path().display());

    println!();
    println!("{}", "=".repeat(60));
    println!("Hiring Workflow Complete");
    println!("Requisition closed: {}", hiring::REQUISITION_ID);
    println!("{}", "=".repeat(60));

    Ok(())
}
