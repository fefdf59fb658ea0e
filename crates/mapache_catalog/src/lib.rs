//! # mapache_catalog
//!
//! Manifest-driven catalog of SaaS integration agents for the Mapache
//! platform.
//!
//! Every integration the platform knows about is described by one
//! [`AgentSpec`] entry in a manifest. The crate ships a builtin manifest
//! covering the full roster and can load external manifests in TOML or
//! YAML form.
//!
//! ## Features
//!
//! - **Builtin roster**: [`Catalog::builtin`] parses the embedded manifest
//! - **External manifests**: single files or whole directories
//! - **Lookups**: by slug, by numeric id, by tier, by category
//! - **Validation**: structural checks with actionable error messages
//!
//! ## Example
//!
//! ```rust
//! use mapache_catalog::{Catalog, CatalogValidator, Tier};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let teams = catalog.get("microsoft_teams").unwrap();
//! assert_eq!(teams.agent_id(), "agent_512");
//! assert_eq!(teams.tier, Tier::EnterpriseEssentials);
//!
//! let result = CatalogValidator::validate(&catalog);
//! assert!(result.valid);
//! ```

pub mod catalog;
pub mod error;
pub mod loader;
pub mod model;
pub mod validator;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use model::{AgentSpec, Tier, DEPARTMENT};
pub use validator::{CatalogValidator, ValidationResult};
