// Showcase Page
// Renders every specimen through its primitive, next to the classes it resolved to

use crate::config::{ComponentKind, ShowcaseConfig, Specimen};
use anyhow::{Context, Result};
use orbit::components::{card, code, h1, h3, muted, CardVariant};
use orbit::prelude::*;
use serde_json::{json, Map, Value};

/// Specimens shown when the config does not list any.
pub fn default_specimens() -> Vec<Specimen> {
    let specimen = |name: &str, component: ComponentKind, props: Value| Specimen {
        name: name.to_string(),
        description: String::new(),
        component,
        props: match props {
            Value::Object(map) => map,
            _ => Map::new(),
        },
    };

    vec![
        specimen(
            "Box",
            ComponentKind::Box,
            json!({
                "padding": "spacing-4",
                "borderRadius": "lg",
                "backgroundColor": "card",
                "children": "A padded surface",
            }),
        ),
        specimen(
            "Responsive Stack",
            ComponentKind::Stack,
            json!({
                "gap": { "default": "spacing-2", "md": "spacing-6" },
                "flexDirection": { "md": "row" },
                "alignItems": "center",
                "justifyContent": { "default": "start", "lg": "between" },
                "children": ["Starter", "Pro", "Enterprise"],
            }),
        ),
        specimen(
            "Text",
            ComponentKind::Text,
            json!({
                "fontSize": { "default": "base", "lg": "xl" },
                "fontWeight": "semibold",
                "color": "primary",
                "children": "Merchant of record",
            }),
        ),
    ]
}

fn render_specimen(theme: &Theme, specimen: &Specimen) -> Result<Element> {
    let primitive = specimen.component.primitive(theme);
    let rendered = primitive
        .render_json(&Value::Object(specimen.props.clone()))
        .with_context(|| format!("Invalid props for specimen '{}'", specimen.name))?;
    let class = rendered.class_name().to_string();

    let mut builder = card(theme)
        .variant(CardVariant::Default)
        .child(h3(theme, specimen.name.as_str()));
    if !specimen.description.is_empty() {
        builder = builder.child(muted(theme, specimen.description.as_str()));
    }
    let preview = create_box(theme).render(
        Props::new()
            .style(
                StyleProps::new()
                    .padding(SpacingToken::S4)
                    .border_radius(RadiusToken::Lg)
                    .background_color(ColorToken::Surface),
            )
            .attr("data-component", primitive.name())
            .child(rendered),
    );
    Ok(builder
        .child(preview)
        .child(code(theme, if class.is_empty() { "(no classes)".to_string() } else { class }))
        .build())
}

fn render_tokens(theme: &Theme) -> Element {
    let mut section = create_stack(theme)
        .render(Props::new().tag(Tag::Section).style(StyleProps::new().gap(SpacingToken::S2)))
        .child(h3(theme, "Tokens").into());
    for category in Category::ALL {
        let mut list = create_stack(theme).render(
            Props::new()
                .tag(Tag::Ul)
                .style(StyleProps::new().gap(SpacingToken::S1))
                .attr("data-category", category.name()),
        );
        for prop in category.variants() {
            let keys = theme.prop_tokens(prop).join(", ");
            list = list.child(
                create_box(theme)
                    .render(
                        Props::new()
                            .tag(Tag::Li)
                            .child(format!("{}: {}", prop.name(), keys)),
                    )
                    .into(),
            );
        }
        section = section.child(muted(theme, category.name()).into()).child(list.into());
    }
    section
}

/// Render the whole showcase document.
pub fn render_site(theme: &Theme, config: &ShowcaseConfig) -> Result<String> {
    let defaults;
    let specimens = if config.specimens.is_empty() {
        defaults = default_specimens();
        &defaults
    } else {
        &config.specimens
    };

    let mut main = create_stack(theme).render(
        Props::new()
            .tag(Tag::Main)
            .style(
                StyleProps::new()
                    .gap(SpacingToken::S8)
                    .padding(Responsive::from(SpacingToken::S4).at(Breakpoint::Md, SpacingToken::S12))
                    .background_color(ColorToken::Background)
                    .color(ColorToken::Text),
            )
            .child(h1(theme, config.site.title.as_str())),
    );
    if !config.site.description.is_empty() {
        main = main.child(muted(theme, config.site.description.as_str()).into());
    }

    for specimen in specimens {
        log::debug!("Rendering specimen '{}'", specimen.name);
        main = main.child(render_specimen(theme, specimen)?.into());
    }
    if config.site.show_tokens {
        main = main.child(render_tokens(theme).into());
    }

    let title = html_escape::encode_text(&config.site.title);
    let stylesheet = config
        .site
        .stylesheet
        .as_deref()
        .map(|href| {
            format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                html_escape::encode_double_quoted_attribute(href)
            )
        })
        .unwrap_or_default();

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
        title,
        stylesheet,
        main.to_html()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml_source: &str) -> ShowcaseConfig {
        toml::from_str(toml_source).unwrap()
    }

    #[test]
    fn default_specimens_render() {
        let html = render_site(&Theme::orbit(), &ShowcaseConfig::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Orbit</title>"));
        assert!(html.contains("Responsive Stack"));
        assert!(html.contains("lg:justify-between"));
        assert!(html.contains("data-component=\"Stack\""));
        assert!(html.contains("data-category=\"spacing\""));
    }

    #[test]
    fn configured_specimens_replace_defaults() {
        let html = render_site(
            &Theme::orbit(),
            &config(
                r#"
                [site]
                title = "Billing <UI>"
                stylesheet = "orbit.css"
                show_tokens = false

                [[specimens]]
                name = "Price"
                component = "text"
                props = { fontSize = "2xl", children = "$20 / month" }
                "#,
            ),
        )
        .unwrap();
        assert!(html.contains("<title>Billing &lt;UI&gt;</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"orbit.css\">"));
        assert!(html.contains("<p class=\"text-2xl\">$20 / month</p>"));
        assert!(!html.contains("Responsive Stack"));
        assert!(!html.contains("data-category"));
    }

    #[test]
    fn invalid_specimen_props_name_the_specimen() {
        let error = render_site(
            &Theme::orbit(),
            &config(
                r#"
                [[specimens]]
                name = "Broken"
                props = { as = "marquee" }
                "#,
            ),
        )
        .unwrap_err();
        assert!(format!("{:#}", error).contains("Broken"));
    }

    #[test]
    fn specimen_without_classes_is_labelled() {
        let html = render_site(
            &Theme::orbit(),
            &config(
                r#"
                [[specimens]]
                name = "Plain"
                props = { padding = "spacing-99" }
                "#,
            ),
        )
        .unwrap();
        assert!(html.contains("(no classes)"));
    }
}
