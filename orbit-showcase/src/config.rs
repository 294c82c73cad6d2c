use anyhow::{Context, Result};
use orbit::components::{create_box, create_stack, create_text, Primitive};
use orbit::Theme;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub specimens: Vec<Specimen>,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Stylesheet linked from the page, typically the compiled utility CSS.
    #[serde(default)]
    pub stylesheet: Option<String>,
    /// Output file, relative to the config file's directory.
    #[serde(default = "default_out")]
    pub out: PathBuf,
    #[serde(default = "default_true")]
    pub show_tokens: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            stylesheet: None,
            out: default_out(),
            show_tokens: true,
        }
    }
}

fn default_title() -> String {
    "Orbit".to_string()
}

fn default_out() -> PathBuf {
    PathBuf::from("dist/index.html")
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Box,
    Stack,
    Text,
}

impl ComponentKind {
    pub fn primitive(self, theme: &Theme) -> Primitive<'_> {
        match self {
            ComponentKind::Box => create_box(theme),
            ComponentKind::Stack => create_stack(theme),
            ComponentKind::Text => create_text(theme),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Specimen {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub component: ComponentKind,
    /// Props in the same shape a component receives them: token strings or
    /// breakpoint tables, plus `className`, `as`, `children` and native attributes.
    #[serde(default)]
    pub props: Map<String, Value>,
}

pub fn load_config(path: &Path) -> Result<ShowcaseConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ShowcaseConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
