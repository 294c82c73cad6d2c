use crate::config::{load_config, ComponentKind};
use crate::site::render_site;
use anyhow::{Context, Result};
use orbit::{Category, Theme};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Resolve a JSON props object through a primitive. Prints the class string,
/// or the rendered element when `html` is set.
pub fn resolve_props(theme: &Theme, component: ComponentKind, props: &str, html: bool) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(props).context("Props are not valid JSON")?;
    let element = component
        .primitive(theme)
        .render_json(&value)
        .context("Failed to resolve props")?;

    if html {
        Ok(element.to_html())
    } else {
        Ok(element.class_name().to_string())
    }
}

/// List every token per category and property with the class it emits at the
/// default breakpoint.
pub fn list_tokens(theme: &Theme, category: Option<Category>) -> String {
    let categories: Vec<Category> = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "[{}]", category);
        for prop in category.variants() {
            let _ = writeln!(out, "  {}", prop);
            for key in theme.prop_tokens(prop) {
                let class = theme.lookup(category, key, prop.name()).unwrap_or_default();
                let _ = writeln!(out, "    {:<16} {}", key, class);
            }
        }
    }
    out
}

/// Every class the theme can emit, one per line.
pub fn safelist(theme: &Theme) -> String {
    let mut out = theme.safelist().join("\n");
    out.push('\n');
    out
}

/// Render the showcase described by `config_path`. `out` overrides the config's
/// output path; both are relative to the config file's directory.
pub fn build_site(theme: &Theme, config_path: &Path, out: Option<&Path>) -> Result<PathBuf> {
    let config = load_config(config_path)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    let target = base.join(out.unwrap_or(&config.site.out));

    log::info!(
        "Building '{}' with {} specimen(s)",
        config.site.title,
        config.specimens.len()
    );
    let html = render_site(theme, &config)?;

    if let Some(dir) = target.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }
    }
    std::fs::write(&target, html)
        .with_context(|| format!("Failed to write site: {}", target.display()))?;

    log::info!("Wrote {}", target.display());
    Ok(target)
}
