//! # mapache_agents
//!
//! SaaS integration agents for the Mapache platform.
//!
//! One [`SaasAgent`] type serves the entire catalog: each instance wraps a
//! catalog [`AgentSpec`] and exposes the integration's identity,
//! capabilities, and configuration through the core [`Agent`] trait.
//!
//! [`AgentSpec`]: mapache_catalog::AgentSpec
//! [`Agent`]: mapache_core::Agent
//!
//! ## Example
//!
//! ```rust
//! use mapache_agents::{roster, SaasAgent};
//! use mapache_catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let agent = SaasAgent::from_catalog(&catalog, "microsoft_teams").unwrap();
//! assert_eq!(agent.config().role, "Microsoft Teams Specialist");
//!
//! // Or materialize the whole roster at once
//! let registry = roster::build(&catalog);
//! assert_eq!(registry.len(), catalog.len());
//! ```

pub mod error;
pub mod roster;
pub mod saas;

pub use error::{AgentError, AgentResult};
pub use saas::{AgentConfig, SaasAgent};
