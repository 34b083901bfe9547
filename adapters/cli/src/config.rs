#![allow(clippy::missing_errors_doc)]

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use stepgate_core::{GenerationConfig, TemplateCatalog, TemplateDescriptor};

/// Settings read from the optional TOML configuration file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Generation behaviour shared by every invocation.
    pub(crate) generation: GenerationConfig,
    /// Replacement catalog; the standard catalog is used when absent.
    pub(crate) templates: Option<Vec<TemplateDescriptor>>,
}

impl CliConfig {
    /// Loads the configuration stored at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid configuration at {}", path.display()))
    }

    /// Parses configuration from TOML text.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration toml contents")
    }

    /// Builds the catalog described by the configuration.
    pub(crate) fn catalog(&self) -> Result<TemplateCatalog> {
        match &self.templates {
            None => Ok(TemplateCatalog::standard()),
            Some(descriptors) => TemplateCatalog::from_descriptors(descriptors.clone())
                .context("configured template catalog is invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepgate_core::{TemplateKind, TimeSplit, WeightingMode};

    #[test]
    fn empty_configuration_uses_defaults() {
        let config = CliConfig::parse("").expect("empty config");
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.catalog().expect("catalog"), TemplateCatalog::standard());
    }

    #[test]
    fn parses_weighting_and_custom_catalog() {
        let config = CliConfig::parse(
            r#"
            [generation]
            weighting = "recompute-per-step"

            [[templates]]
            id = "short_wait"
            kind = "timer"
            min_seconds = 10
            max_seconds = 30
            step_seconds = 10
            cost_factor = 1.0

            [[templates]]
            id = "tap"
            kind = "click"
            min_clicks = 2
            max_clicks = 8
            clicks_per_second = 4

            [[templates]]
            id = "wait_then_tap"
            kind = "composite"
            components = ["short_wait", "tap"]
            split = { mode = "remainder", first = 0.75 }
            "#,
        )
        .expect("valid config");

        assert_eq!(config.generation.weighting, WeightingMode::RecomputePerStep);
        let catalog = config.catalog().expect("valid catalog");
        assert_eq!(catalog.len(), 3);
        match catalog.get("wait_then_tap").map(|descriptor| descriptor.kind()) {
            Some(TemplateKind::Composite(rule)) => {
                assert_eq!(rule.split(), TimeSplit::Remainder { first: 0.75 });
            }
            other => panic!("expected composite rule, found {other:?}"),
        }
    }

    #[test]
    fn rejects_catalog_with_dangling_component() {
        let config = CliConfig::parse(
            r#"
            [[templates]]
            id = "pair"
            kind = "composite"
            components = ["ghost", "ghost"]
            split = { mode = "proportional", first = 0.5, second = 0.5 }
            "#,
        )
        .expect("syntactically valid config");

        let error = config.catalog().expect_err("dangling component");
        assert!(format!("{error:#}").contains("unknown template `ghost`"));
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(CliConfig::parse("[rendering]\npage = \"x\"\n").is_err());
    }
}
