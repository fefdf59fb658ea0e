//! Catalog collection with slug and id indexes.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{AgentSpec, Tier};

/// Embedded builtin manifest covering the full agent roster.
const BUILTIN_MANIFEST: &str = include_str!("../data/agents.toml");

/// An ordered collection of agent specs with fast lookups.
///
/// Entries keep manifest order. Slugs and ids are unique; inserting a
/// duplicate is an error rather than a silent replacement, since manifests
/// are authored by hand and collisions are always mistakes.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    agents: Vec<AgentSpec>,
    by_slug: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the embedded builtin manifest.
    pub fn builtin() -> CatalogResult<Self> {
        let catalog = crate::loader::CatalogLoader::from_toml_str(BUILTIN_MANIFEST, "builtin")?;
        debug!("Loaded builtin catalog with {} agents", catalog.len());
        Ok(catalog)
    }

    /// Insert a spec, rejecting duplicate ids or slugs.
    pub fn insert(&mut self, spec: AgentSpec) -> CatalogResult<()> {
        if let Some(&existing) = self.by_id.get(&spec.id) {
            return Err(CatalogError::DuplicateId {
                id: spec.id,
                first: self.agents[existing].slug.clone(),
                second: spec.slug,
            });
        }
        if self.by_slug.contains_key(&spec.slug) {
            return Err(CatalogError::DuplicateSlug(spec.slug));
        }

        let index = self.agents.len();
        self.by_slug.insert(spec.slug.clone(), index);
        self.by_id.insert(spec.id, index);
        self.agents.push(spec);
        Ok(())
    }

    /// Get an agent spec by slug.
    pub fn get(&self, slug: &str) -> Option<&AgentSpec> {
        self.by_slug.get(slug).map(|&i| &self.agents[i])
    }

    /// Get an agent spec by slug, returning an error if absent.
    pub fn get_required(&self, slug: &str) -> CatalogResult<&AgentSpec> {
        self.get(slug)
            .ok_or_else(|| CatalogError::UnknownAgent(slug.to_string()))
    }

    /// Get an agent spec by numeric id.
    pub fn get_by_id(&self, id: u32) -> Option<&AgentSpec> {
        self.by_id.get(&id).map(|&i| &self.agents[i])
    }

    /// All agents in a tier, in manifest order.
    pub fn by_tier(&self, tier: Tier) -> Vec<&AgentSpec> {
        self.agents.iter().filter(|a| a.tier == tier).collect()
    }

    /// All agents in a category, in manifest order.
    pub fn by_category(&self, category: &str) -> Vec<&AgentSpec> {
        self.agents.iter().filter(|a| a.category == category).collect()
    }

    /// Sorted set of every category present in the catalog.
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.agents.iter().map(|a| a.category.as_str()).collect();
        set.into_iter().collect()
    }

    /// Iterate all agents in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentSpec> {
        self.agents.iter()
    }

    /// Number of agents in the catalog.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Check whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Merge another catalog into this one. Collisions are errors.
    pub fn merge(&mut self, other: Catalog) -> CatalogResult<()> {
        for spec in other.agents {
            self.insert(spec)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AgentSpec;
    type IntoIter = std::slice::Iter<'a, AgentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: u32, slug: &str) -> AgentSpec {
        AgentSpec {
            id,
            slug: slug.to_string(),
            name: slug.to_string(),
            tier: Tier::DeveloperTools,
            category: "devops".to_string(),
            api_key_env: format!("{}_API_KEY", slug.to_uppercase()),
            base_url: format!("https://api.{slug}.com"),
            has_mcp_server: false,
            docs_url: None,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert(spec(1, "github")).unwrap();
        catalog.insert(spec(2, "gitlab")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("github").unwrap().id, 1);
        assert_eq!(catalog.get_by_id(2).unwrap().slug, "gitlab");
        assert!(catalog.get("bitbucket").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(spec(1, "github")).unwrap();

        let err = catalog.insert(spec(1, "gitlab")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1, .. }));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(spec(1, "github")).unwrap();

        let err = catalog.insert(spec(2, "github")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(_)));
    }

    #[test]
    fn test_get_required_unknown() {
        let catalog = Catalog::new();
        let err = catalog.get_required("nope").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAgent(_)));
    }

    #[test]
    fn test_category_index() {
        let mut catalog = Catalog::new();
        let mut crm = spec(1, "hubspot");
        crm.category = "crm".to_string();
        catalog.insert(crm).unwrap();
        catalog.insert(spec(2, "jenkins")).unwrap();

        assert_eq!(catalog.by_category("crm").len(), 1);
        assert_eq!(catalog.categories(), vec!["crm", "devops"]);
    }

    #[test]
    fn test_builtin_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 275);

        let teams = catalog.get("microsoft_teams").unwrap();
        assert_eq!(teams.agent_id(), "agent_512");
        assert_eq!(teams.tier, Tier::EnterpriseEssentials);
        assert_eq!(teams.api_key_env, "MICROSOFT_TEAMS_API_KEY");

        let abas = catalog.get("abas_erp").unwrap();
        assert_eq!(abas.agent_id(), "agent_1306");
        assert_eq!(abas.category, "manufacturing");
        assert!(!abas.has_mcp_server);
    }

    #[test]
    fn test_builtin_tier_counts() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.by_tier(Tier::EnterpriseEssentials).len(), 9);
        assert_eq!(catalog.by_tier(Tier::ProductivityCollaboration).len(), 44);
        assert_eq!(catalog.by_tier(Tier::MarketingSales).len(), 28);
        assert_eq!(catalog.by_tier(Tier::DeveloperTools).len(), 27);
        assert_eq!(catalog.by_tier(Tier::SpecializedVertical).len(), 167);
    }
}
