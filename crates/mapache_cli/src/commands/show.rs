//! Show command - Show one agent's configuration.

use anyhow::Result;
use clap::Args;

use mapache_agents::SaasAgent;
use mapache_catalog::Catalog;

#[derive(Args)]
pub struct ShowArgs {
    /// Agent slug, e.g. "microsoft_teams"
    slug: String,

    /// Print the raw configuration JSON only
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: ShowArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let agent = SaasAgent::from_catalog(&catalog, &args.slug)?;
    let spec = agent.spec();
    let config = agent.config();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("🦝 {} ({})", spec.name, config.agent_id);
    println!();
    println!("Role:        {}", config.role);
    println!("Department:  {}", spec.department());
    println!("Tier:        {}", config.tier);
    println!("Category:    {}", config.category);
    println!("Endpoint:    {}", config.api_endpoint);
    println!("API key env: {}", spec.api_key_env);
    println!(
        "MCP server:  {}",
        if config.mcp_available { "available" } else { "not available" }
    );

    println!();
    println!("Responsibilities:");
    for item in spec.responsibilities() {
        println!("  - {}", item);
    }

    println!();
    println!("Integrations:");
    for item in spec.integrations() {
        println!("  - {}", item);
    }

    Ok(())
}
