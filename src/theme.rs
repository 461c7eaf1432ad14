//! Theme support
//!
//! A theme names the style mapping the renderer resolves classification
//! tags against, plus the class carried by the `<code>` wrapper. The
//! built-in theme covers the whole `pl-*` vocabulary; user themes are
//! TOML files whose `[classes]` table overrides individual tags.
//!
//! Example:
//! ```toml
//! name = "nord"
//! code-class = "hl-code hl-nord"
//!
//! [classes]
//! pl-k = "text-purple-700"
//! pl-c = "text-gray-500"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HiliteError, Result};
use crate::style::StyleMap;

/// A named style mapping
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Class placed on the `<code>` wrapper
    pub code_class: String,
    /// Tag-set to style-class mapping
    classes: StyleMap,
}

/// On-disk theme file shape
#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: Option<String>,
    #[serde(rename = "code-class")]
    code_class: Option<String>,
    classes: Option<std::collections::HashMap<String, String>>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            code_class: "hl-code".to_string(),
            classes: StyleMap::builtin(),
        }
    }
}

impl Theme {
    /// Parse a theme from TOML, overriding the built-in mapping
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ThemeFile =
            toml::from_str(contents).map_err(|e| HiliteError::Config(e.to_string()))?;

        let mut theme = Theme::default();
        if let Some(name) = file.name {
            theme.name = name;
        }
        if let Some(code_class) = file.code_class {
            theme.code_class = code_class;
        }
        if let Some(classes) = file.classes {
            for (tag, class) in &classes {
                theme.classes.insert_tag(tag, class);
            }
        }
        Ok(theme)
    }

    /// Load a theme file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Resolve a classification tag-set; None means unmapped
    pub fn class_for(&self, tags: &[String]) -> Option<&str> {
        self.classes.class_for(tags)
    }
}
