//! Structural validation for catalogs.

use regex::Regex;

use crate::catalog::Catalog;
use crate::model::AgentSpec;

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for catalog contents.
///
/// Id and slug uniqueness is already enforced at insertion time, so the
/// validator focuses on per-entry shape: identifier conventions, env var
/// naming, and endpoint URLs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate an entire catalog.
    pub fn validate(catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::new();

        if catalog.is_empty() {
            result.add_warning("Catalog is empty");
        }

        for spec in catalog.iter() {
            result.merge(Self::validate_spec(spec));
        }

        result
    }

    /// Validate a single agent spec.
    pub fn validate_spec(spec: &AgentSpec) -> ValidationResult {
        let mut result = ValidationResult::new();

        let slug_re = Regex::new(r"^[a-z0-9_]+$").unwrap();
        let env_re = Regex::new(r"^[A-Z][A-Z0-9_]*_API_KEY$").unwrap();

        if spec.name.trim().is_empty() {
            result.add_error(format!("Agent {} has empty name", spec.agent_id()));
        }

        if spec.slug.is_empty() {
            result.add_error(format!("Agent {} has empty slug", spec.agent_id()));
        } else if !slug_re.is_match(&spec.slug) {
            result.add_error(format!(
                "Agent {} slug '{}' must be snake_case ([a-z0-9_]+)",
                spec.agent_id(),
                spec.slug
            ));
        }

        if spec.category.trim().is_empty() {
            result.add_error(format!("Agent {} has empty category", spec.agent_id()));
        }

        if !spec.base_url.starts_with("https://") && !spec.base_url.starts_with("http://") {
            result.add_error(format!(
                "Agent {} base_url '{}' is not an http(s) URL",
                spec.agent_id(),
                spec.base_url
            ));
        }

        if !env_re.is_match(&spec.api_key_env) {
            result.add_warning(format!(
                "Agent {} api_key_env '{}' does not follow the <PRODUCT>_API_KEY convention",
                spec.agent_id(),
                spec.api_key_env
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    fn valid_spec() -> AgentSpec {
        AgentSpec {
            id: 700,
            slug: "github".to_string(),
            name: "GitHub".to_string(),
            tier: Tier::DeveloperTools,
            category: "devops".to_string(),
            api_key_env: "GITHUB_API_KEY".to_string(),
            base_url: "https://api.github.com".to_string(),
            has_mcp_server: true,
            docs_url: None,
        }
    }

    #[test]
    fn test_valid_spec_passes() {
        let result = CatalogValidator::validate_spec(&valid_spec());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_bad_slug_rejected() {
        let mut spec = valid_spec();
        spec.slug = "Git-Hub".to_string();
        let result = CatalogValidator::validate_spec(&spec);
        assert!(!result.valid);
        assert!(result.errors[0].contains("snake_case"));
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut spec = valid_spec();
        spec.base_url = "api.github.com".to_string();
        let result = CatalogValidator::validate_spec(&spec);
        assert!(!result.valid);
    }

    #[test]
    fn test_unconventional_env_var_warns() {
        let mut spec = valid_spec();
        spec.api_key_env = "GITHUB_TOKEN".to_string();
        let result = CatalogValidator::validate_spec(&spec);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let catalog = Catalog::builtin().unwrap();
        let result = CatalogValidator::validate(&catalog);
        assert!(result.valid, "builtin errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "builtin warnings: {:?}", result.warnings);
    }
}
