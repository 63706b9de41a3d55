use crate::encoder::DEFAULT_BLOCK_WIDTH;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shape of the generated module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the generated constructor function
    pub function: String,
    /// Cargo feature that gates the generated function, if any
    pub cfg_feature: Option<String>,
    /// Emit the function as `pub`
    pub public: bool,
    /// Byte literals per line in the generated data blocks
    pub block_width: usize,
    /// Path the generated code uses to reach this crate
    pub crate_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            function: "assets".to_string(),
            cfg_feature: None,
            public: true,
            block_width: DEFAULT_BLOCK_WIDTH,
            crate_path: "::assetpack".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .context(format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name ends up as valid Rust in the generated module
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.function) {
            bail!("Invalid function name: {:?}", self.function);
        }

        if !is_crate_path(&self.crate_path) {
            bail!("Invalid crate path: {:?}", self.crate_path);
        }

        if let Some(feature) = &self.cfg_feature {
            if feature.is_empty() || feature.contains(|c: char| c == '"' || c == '\\') {
                bail!("Invalid cfg feature: {:?}", feature);
            }
        }

        Ok(())
    }
}

/// Strict and reserved keywords of the 2021 edition. None of them can name
/// the generated function or a plain path segment.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    s != "_" && !KEYWORDS.contains(&s) && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// `::name::...` or a relative path whose first segment may be
/// `crate`, `self` or `super`
fn is_crate_path(path: &str) -> bool {
    let (relative, rest) = match path.strip_prefix("::") {
        Some(rest) => (false, rest),
        None => (true, path),
    };

    let mut segments = rest.split("::");
    let first = match segments.next() {
        Some(first) => first,
        None => return false,
    };
    let first_ok = is_identifier(first)
        || (relative && matches!(first, "crate" | "self" | "super"));

    first_ok && segments.all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.function, "assets");
        assert_eq!(config.block_width, 12);
        assert!(config.public);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "function": "web_assets", "cfg_feature": "embed" }}"#).unwrap();

        let config = GeneratorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.function, "web_assets");
        assert_eq!(config.cfg_feature.as_deref(), Some("embed"));
        assert_eq!(config.block_width, 12);
        assert_eq!(config.crate_path, "::assetpack");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = GeneratorConfig::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_rejects_bad_names() {
        let config = GeneratorConfig {
            function: "1assets".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            crate_path: "::asset-pack".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            cfg_feature: Some("a\"b".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_nested_crate_path() {
        let config = GeneratorConfig {
            crate_path: "crate::vendor::assetpack".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_keywords() {
        for name in ["fn", "match", "self", "crate", "type", "async", "Self"] {
            let config = GeneratorConfig {
                function: name.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "function {:?} accepted", name);
        }

        for path in ["::fn::x", "::crate", "::self::assets", "assetpack::impl", "crate::super"] {
            let config = GeneratorConfig {
                crate_path: path.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "crate path {:?} accepted", path);
        }

        // Keywords are only a problem as whole names
        let config = GeneratorConfig {
            function: "fn_assets".to_string(),
            crate_path: "self::types".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_relative_path_roots() {
        for path in ["crate", "self::embedded", "super::assetpack", "assetpack"] {
            let config = GeneratorConfig {
                crate_path: path.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "crate path {:?} rejected", path);
        }
    }
}
