//! CLI command definitions.
//!
//! This module defines the command structure for the Mapache CLI.
//! Each subcommand maps to one operation against the agent catalog
//! or the workflow runtime.

use clap::{Parser, Subcommand};

pub mod exec;
pub mod list;
pub mod show;
pub mod validate;
pub mod workflow;

/// Mapache - SaaS integration agent platform
#[derive(Parser)]
#[command(name = "mapache")]
#[command(version, about = "Mapache - SaaS integration agent platform")]
#[command(long_about = r#"
Mapache manages a catalog of SaaS integration agents and runs
multi-agent workflows over them.

COMMANDS:
  list      → List catalog agents, filterable by tier or category
  show      → Show one agent's configuration
  exec      → Execute a task against one agent
  validate  → Validate the builtin catalog or an external manifest
  workflow  → Run a multi-agent workflow demonstration

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog agents
    List(list::ListArgs),

    /// Show one agent's configuration
    Show(show::ShowArgs),

    /// Execute a task against one agent
    Exec(exec::ExecArgs),

    /// Validate the catalog or an external manifest
    Validate(validate::ValidateArgs),

    /// Run a multi-agent workflow demonstration
    Workflow(workflow::WorkflowArgs),
}
