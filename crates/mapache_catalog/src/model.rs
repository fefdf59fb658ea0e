//! Data models for agent manifests.

use serde::{Deserialize, Serialize};

/// Department label shared by every SaaS integration agent.
pub const DEPARTMENT: &str = "SaaS Integration";

/// Catalog tier an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    EnterpriseEssentials,
    ProductivityCollaboration,
    MarketingSales,
    DeveloperTools,
    SpecializedVertical,
}

impl Tier {
    /// Manifest identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::EnterpriseEssentials => "enterprise-essentials",
            Tier::ProductivityCollaboration => "productivity-collaboration",
            Tier::MarketingSales => "marketing-sales",
            Tier::DeveloperTools => "developer-tools",
            Tier::SpecializedVertical => "specialized-vertical",
        }
    }

    /// Human-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::EnterpriseEssentials => "Enterprise Essentials",
            Tier::ProductivityCollaboration => "Productivity & Collaboration",
            Tier::MarketingSales => "Marketing & Sales",
            Tier::DeveloperTools => "Developer Tools",
            Tier::SpecializedVertical => "Specialized Vertical Tools",
        }
    }

    /// Parse a tier from either its manifest identifier or its label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "enterprise-essentials" | "Enterprise Essentials" => Some(Tier::EnterpriseEssentials),
            "productivity-collaboration" | "Productivity & Collaboration" => {
                Some(Tier::ProductivityCollaboration)
            }
            "marketing-sales" | "Marketing & Sales" => Some(Tier::MarketingSales),
            "developer-tools" | "Developer Tools" => Some(Tier::DeveloperTools),
            "specialized-vertical" | "Specialized Vertical Tools" => {
                Some(Tier::SpecializedVertical)
            }
            _ => None,
        }
    }

    /// All tiers in roster order.
    pub fn all() -> Vec<Self> {
        vec![
            Tier::EnterpriseEssentials,
            Tier::ProductivityCollaboration,
            Tier::MarketingSales,
            Tier::DeveloperTools,
            Tier::SpecializedVertical,
        ]
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One SaaS integration agent entry in a manifest.
///
/// The spec is pure configuration data. Runtime behavior lives in the
/// agent implementation that wraps it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentSpec {
    /// Stable numeric id. Sparse, never reused.
    pub id: u32,
    /// Unique snake_case product identifier.
    pub slug: String,
    /// Product display name, e.g. "Microsoft Teams".
    pub name: String,
    /// Catalog tier.
    pub tier: Tier,
    /// Free-form category label, e.g. "communication".
    pub category: String,
    /// Environment variable holding the product API key.
    pub api_key_env: String,
    /// Product API base URL.
    pub base_url: String,
    /// Whether a public MCP server exists for the product.
    #[serde(default)]
    pub has_mcp_server: bool,
    /// Optional link to the product API documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl AgentSpec {
    /// The canonical agent identifier, e.g. `agent_512`.
    pub fn agent_id(&self) -> String {
        format!("agent_{}", self.id)
    }

    /// The agent role label, e.g. "Microsoft Teams Specialist".
    pub fn role(&self) -> String {
        format!("{} Specialist", self.name)
    }

    /// Department label. Identical for every catalog agent.
    pub fn department(&self) -> &'static str {
        DEPARTMENT
    }

    /// Responsibilities carried by the integration.
    pub fn responsibilities(&self) -> Vec<String> {
        vec![
            format!("{} API integration", self.name),
            "Data synchronization and management".to_string(),
            "Authentication and authorization".to_string(),
            "Workflow automation".to_string(),
            "Integration monitoring".to_string(),
            "Error handling and recovery".to_string(),
            "Rate limiting and quota management".to_string(),
            "Best practices implementation".to_string(),
        ]
    }

    /// Upstream surfaces the integration connects to.
    pub fn integrations(&self) -> Vec<String> {
        vec![
            format!("{} API", self.name),
            "Webhook integration".to_string(),
            "OAuth 2.0 authentication".to_string(),
            "MCP server protocols".to_string(),
            "Google Vertex AI Agent Engine".to_string(),
        ]
    }
}

impl std::fmt::Display for AgentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.agent_id())
    }
}
