//! List command - List catalog agents.

use anyhow::Result;
use clap::{Args, ValueEnum};

use mapache_catalog::{Catalog, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show agents in this tier (e.g. "developer-tools")
    #[arg(short, long)]
    tier: Option<String>,

    /// Only show agents in this category (e.g. "manufacturing")
    #[arg(short, long)]
    category: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

pub async fn execute(args: ListArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;

    let tier = match args.tier.as_deref() {
        Some(s) => Some(
            Tier::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown tier: {s}"))?,
        ),
        None => None,
    };

    let agents: Vec<_> = catalog
        .iter()
        .filter(|a| tier.map_or(true, |t| a.tier == t))
        .filter(|a| {
            args.category
                .as_deref()
                .map_or(true, |c| a.category == c)
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&agents)?);
        }
        OutputFormat::Table => {
            println!(
                "{:<12} {:<28} {:<28} {}",
                "ID", "SLUG", "TIER", "CATEGORY"
            );
            for agent in &agents {
                println!(
                    "{:<12} {:<28} {:<28} {}",
                    agent.agent_id(),
                    agent.slug,
                    agent.tier.label(),
                    agent.category
                );
            }
            println!();
            println!("{} agents", agents.len());
        }
    }

    Ok(())
}
