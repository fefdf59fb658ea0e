//! Validate command - Validate the catalog or an external manifest.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use mapache_catalog::{Catalog, CatalogLoader, CatalogValidator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to an external manifest file or directory.
    /// When omitted the builtin catalog is validated.
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

pub async fn execute(args: ValidateArgs) -> Result<()> {
    let catalog = match &args.manifest {
        Some(path) if path.is_dir() => {
            info!("Validating manifest directory: {}", path.display());
            CatalogLoader::load_dir(path)?
        }
        Some(path) => {
            info!("Validating manifest file: {}", path.display());
            CatalogLoader::load_file(path)?
        }
        None => {
            info!("Validating builtin catalog");
            Catalog::builtin()?
        }
    };

    println!("📋 Validating {} agents...", catalog.len());

    let result = CatalogValidator::validate(&catalog);

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if result.valid {
        println!("   ✅ Catalog validation passed");
        Ok(())
    } else {
        for error in &result.errors {
            println!("   ❌ {}", error);
        }
        anyhow::bail!(
            "Catalog validation failed with {} error(s)",
            result.errors.len()
        );
    }
}
