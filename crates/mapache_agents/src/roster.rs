//! Roster builders: materialize catalog entries into a live registry.

use std::sync::Arc;

use tracing::debug;

use mapache_catalog::{Catalog, Tier};
use mapache_core::AgentRegistry;

use crate::saas::SaasAgent;

/// Build a registry holding one [`SaasAgent`] per catalog entry.
pub fn build(catalog: &Catalog) -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    for spec in catalog {
        registry.register(Arc::new(SaasAgent::new(spec.clone())));
    }
    debug!("Built roster with {} agents", registry.len());
    registry
}

/// Build a registry restricted to one tier.
pub fn build_for_tier(catalog: &Catalog, tier: Tier) -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    for spec in catalog.by_tier(tier) {
        registry.register(Arc::new(SaasAgent::new(spec.clone())));
    }
    registry
}

/// Build a registry restricted to one category.
pub fn build_for_category(catalog: &Catalog, category: &str) -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    for spec in catalog.by_category(category) {
        registry.register(Arc::new(SaasAgent::new(spec.clone())));
    }
    registry
}
