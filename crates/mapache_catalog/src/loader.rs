//! Manifest loaders for TOML and YAML sources.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::model::AgentSpec;

/// On-disk manifest shape: a list of agent entries.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(alias = "agents")]
    agent: Vec<AgentSpec>,
}

/// Loads agent manifests from strings, files, or directories.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse a TOML manifest string into a catalog.
    ///
    /// `source_name` is used in error messages only.
    pub fn from_toml_str(content: &str, source_name: &str) -> CatalogResult<Catalog> {
        let manifest: Manifest = toml::from_str(content)
            .map_err(|e| CatalogError::parse(source_name, e.to_string()))?;
        Self::collect(manifest.agent)
    }

    /// Parse a YAML manifest string into a catalog.
    pub fn from_yaml_str(content: &str, source_name: &str) -> CatalogResult<Catalog> {
        let manifest: Manifest = serde_yaml::from_str(content)
            .map_err(|e| CatalogError::parse(source_name, e.to_string()))?;
        Self::collect(manifest.agent)
    }

    /// Load a manifest file, dispatching on extension.
    pub fn load_file(path: &Path) -> CatalogResult<Catalog> {
        let content = std::fs::read_to_string(path)?;
        let source_name = path.display().to_string();

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content, &source_name),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content, &source_name),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Load and merge every manifest under a directory.
    ///
    /// Walks the tree collecting `*.toml`, `*.yaml` and `*.yml` files in
    /// path order. Files with other extensions are skipped with a warning.
    pub fn load_dir(dir: &Path) -> CatalogResult<Catalog> {
        let mut catalog = Catalog::new();
        let mut files: Vec<_> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();
        files.sort();

        for path in files {
            match path.extension().and_then(|e| e.to_str()) {
                Some("toml") | Some("yaml") | Some("yml") => {
                    debug!("Loading manifest: {}", path.display());
                    catalog.merge(Self::load_file(&path)?)?;
                }
                _ => {
                    warn!("Skipping non-manifest file: {}", path.display());
                }
            }
        }

        Ok(catalog)
    }

    fn collect(specs: Vec<AgentSpec>) -> CatalogResult<Catalog> {
        let mut catalog = Catalog::new();
        for spec in specs {
            catalog.insert(spec)?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_MANIFEST: &str = r#"
        [[agent]]
        id = 700
        slug = "github"
        name = "GitHub"
        tier = "developer-tools"
        category = "devops"
        api_key_env = "GITHUB_API_KEY"
        base_url = "https://api.github.com"
        has_mcp_server = true
    "#;

    const YAML_MANIFEST: &str = r#"
        agents:
          - id: 701
            slug: gitlab
            name: GitLab
            tier: developer-tools
            category: devops
            api_key_env: GITLAB_API_KEY
            base_url: "https://api.gitlab.com"
    "#;

    #[test]
    fn test_toml_manifest() {
        let catalog = CatalogLoader::from_toml_str(TOML_MANIFEST, "test").unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("github").unwrap().has_mcp_server);
    }

    #[test]
    fn test_yaml_manifest_with_agents_alias() {
        let catalog = CatalogLoader::from_yaml_str(YAML_MANIFEST, "test").unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.get("gitlab").unwrap().has_mcp_server);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = CatalogLoader::from_toml_str("not toml [", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_dir_merges_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), TOML_MANIFEST).unwrap();
        std::fs::write(dir.path().join("b.yaml"), YAML_MANIFEST).unwrap();
        std::fs::write(dir.path().join("README.md"), "# not a manifest").unwrap();

        let catalog = CatalogLoader::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("github").is_some());
        assert!(catalog.get("gitlab").is_some());
    }

    #[test]
    fn test_load_dir_detects_collisions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), TOML_MANIFEST).unwrap();
        std::fs::write(dir.path().join("b.toml"), TOML_MANIFEST).unwrap();

        assert!(CatalogLoader::load_dir(dir.path()).is_err());
    }
}
