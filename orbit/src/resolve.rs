// Property Resolver
// Style props -> class string, walking the fixed list of recognized props

use crate::error::{json_type_name, PropsError};
use crate::props::{StyleProp, StyleProps};
use crate::tokens::Theme;
use serde_json::Value;
use std::fmt;

/// Space-separated class names, ready for a `class` attribute.
///
/// Not deduplicated: when two classes target the same CSS property, the later one
/// in the stylesheet wins, which is the CSS engine's business.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassString(String);

impl ClassString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join class fragments, skipping empty ones. Fragments may themselves contain
    /// several classes.
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut class = ClassString::new();
        for part in parts {
            class.push(part);
        }
        class
    }

    pub fn push(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(fragment);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Individual class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split_whitespace()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClassString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Classes for one prop, in breakpoint order.
pub fn resolve_prop(theme: &Theme, prop: StyleProp, props: &StyleProps) -> Vec<&'static str> {
    props
        .get(prop)
        .map(|value| value.expand_with(|token| theme.class_table(prop, token)))
        .unwrap_or_default()
}

/// Resolve every recognized prop present in `props`.
pub fn resolve(theme: &Theme, props: &StyleProps) -> ClassString {
    resolve_recognized(theme, props, &StyleProp::ALL)
}

/// Resolve only the props listed in `recognized`, in that order. Props outside the
/// list contribute nothing.
pub fn resolve_recognized(theme: &Theme, props: &StyleProps, recognized: &[StyleProp]) -> ClassString {
    let mut classes = ClassString::new();
    for prop in recognized {
        for class in resolve_prop(theme, *prop, props) {
            classes.push(class);
        }
    }
    classes
}

/// Resolve a JSON-shaped props object. Entries that are not style props are
/// ignored here; see [`StyleProps::from_json`] for the forwarding split.
pub fn resolve_json(theme: &Theme, props: &Value) -> Result<ClassString, PropsError> {
    let Value::Object(props) = props else {
        return Err(PropsError::NotAnObject(json_type_name(props)));
    };
    let (style, _rest) = StyleProps::from_json(props, &StyleProp::ALL)?;
    Ok(resolve(theme, &style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, Responsive};
    use crate::tokens::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn class_set(class: &ClassString) -> HashSet<&str> {
        class.classes().collect()
    }

    #[test]
    fn resolves_three_tokens_to_their_registered_classes() {
        let theme = Theme::orbit();
        let class = resolve_json(
            &theme,
            &json!({ "padding": "spacing-3", "alignItems": "center", "borderRadius": "lg" }),
        )
        .unwrap();

        let expected: HashSet<&str> = ["p-3", "items-center", "rounded-lg"].into_iter().collect();
        assert_eq!(class_set(&class), expected);
        assert_eq!(class.classes().count(), 3);
    }

    #[test]
    fn responsive_justify_content_only_emits_given_breakpoints() {
        let theme = Theme::orbit();
        let class = resolve_json(
            &theme,
            &json!({ "justifyContent": { "default": "start", "lg": "between" } }),
        )
        .unwrap();

        let classes: Vec<&str> = class.classes().collect();
        assert_eq!(classes, vec!["justify-start", "lg:justify-between"]);
        for prefix in ["sm:", "md:", "xl:", "2xl:"] {
            assert!(!classes.iter().any(|c| c.starts_with(prefix)));
        }
    }

    #[test]
    fn unknown_token_resolves_like_absent_prop() {
        let theme = Theme::orbit();
        let missing = resolve_json(&theme, &json!({ "padding": "nonexistent-token" })).unwrap();
        let empty = resolve_json(&theme, &json!({})).unwrap();
        assert_eq!(missing, empty);
        assert!(missing.is_empty());

        let mixed = resolve_json(&theme, &json!({ "padding": "nope", "margin": "spacing-2" })).unwrap();
        assert_eq!(mixed.as_str(), "m-2");
    }

    #[test]
    fn unknown_props_never_reach_the_class_string() {
        let theme = Theme::orbit();
        let class = resolve_json(
            &theme,
            &json!({ "gap": "spacing-4", "onClick": "spacing-4", "id": "main", "aria-label": "x" }),
        )
        .unwrap();
        assert_eq!(class.as_str(), "gap-4");
    }

    #[test]
    fn output_follows_recognized_order_not_input_order() {
        let theme = Theme::orbit();
        let props = StyleProps::new()
            .justify_content(JustifyContent::Center)
            .border_radius(RadiusToken::Md)
            .padding(SpacingToken::S1);
        assert_eq!(resolve(&theme, &props).as_str(), "p-1 rounded-md justify-center");
    }

    #[test]
    fn responsive_props_keep_breakpoint_order() {
        let theme = Theme::orbit();
        let props = StyleProps::new().padding(
            Responsive::breakpoints()
                .at(Breakpoint::Xl, SpacingToken::S8)
                .at(Breakpoint::Sm, SpacingToken::S2),
        );
        assert_eq!(resolve(&theme, &props).as_str(), "sm:p-2 xl:p-8");
    }

    #[test]
    fn resolve_recognized_skips_props_outside_the_set() {
        let theme = Theme::orbit();
        let props = StyleProps::new()
            .padding(SpacingToken::S4)
            .font_size(FontSize::Lg);
        let class = resolve_recognized(&theme, &props, &[StyleProp::FontSize]);
        assert_eq!(class.as_str(), "text-lg");
    }

    #[test]
    fn non_object_props_are_rejected() {
        let theme = Theme::orbit();
        assert_eq!(
            resolve_json(&theme, &json!(["padding"])).unwrap_err(),
            PropsError::NotAnObject("an array")
        );
    }

    #[test]
    fn class_string_skips_empty_fragments() {
        let class = ClassString::from_parts(["flex flex-col", "", "  ", "p-2"]);
        assert_eq!(class.as_str(), "flex flex-col p-2");
    }
}
