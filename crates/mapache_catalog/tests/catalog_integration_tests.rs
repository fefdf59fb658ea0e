//! Integration tests for the builtin catalog and manifest loaders.

use mapache_catalog::{Catalog, CatalogLoader, CatalogValidator, Tier};

#[test]
fn test_builtin_roster_is_complete_and_clean() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 275);

    let result = CatalogValidator::validate(&catalog);
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
}

#[test]
fn test_builtin_ids_are_within_known_range() {
    let catalog = Catalog::builtin().unwrap();
    for spec in &catalog {
        assert!(
            (512..=1511).contains(&spec.id),
            "unexpected id {} for {}",
            spec.id,
            spec.slug
        );
    }
}

#[test]
fn test_every_tier_is_populated() {
    let catalog = Catalog::builtin().unwrap();
    for tier in Tier::all() {
        assert!(
            !catalog.by_tier(tier).is_empty(),
            "tier {tier} has no agents"
        );
    }
}

#[test]
fn test_known_agents_round_trip_through_config_fields() {
    let catalog = Catalog::builtin().unwrap();

    let commerce = catalog.get("salesforce_commerce").unwrap();
    assert_eq!(commerce.role(), "Salesforce Commerce Cloud Specialist");
    assert_eq!(commerce.api_key_env, "SALESFORCE_COMMERCE_API_KEY");
    assert!(commerce.base_url.starts_with("https://"));

    let abas = catalog.get("abas_erp").unwrap();
    assert_eq!(abas.agent_id(), "agent_1306");
    assert_eq!(abas.tier.label(), "Specialized Vertical Tools");
    assert_eq!(abas.category, "manufacturing");
    assert_eq!(abas.department(), "SaaS Integration");
}

#[test]
fn test_external_manifest_extends_roster() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("extra.toml"),
        r#"
        [[agent]]
        id = 9001
        slug = "internal_ledger"
        name = "Internal Ledger"
        tier = "specialized-vertical"
        category = "finance"
        api_key_env = "INTERNAL_LEDGER_API_KEY"
        base_url = "https://api.internalledger.com"
        "#,
    )
    .unwrap();

    let mut catalog = Catalog::builtin().unwrap();
    catalog.merge(CatalogLoader::load_dir(dir.path()).unwrap()).unwrap();

    assert_eq!(catalog.len(), 276);
    assert!(catalog.get("internal_ledger").is_some());
}
