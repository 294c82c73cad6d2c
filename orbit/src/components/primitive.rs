// Primitive Component Factory
// Splits style props from native props, resolves classes and renders into a host

use crate::element::{ClassHost, Element, Node, Tag};
use crate::error::{json_type_name, PropsError};
use crate::props::{StyleProp, StyleProps};
use crate::resolve::{resolve_recognized, ClassString};
use crate::tokens::Theme;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Props handed to a primitive: style props, the `className` escape hatch,
/// native attributes and children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    tag: Option<Tag>,
    class_name: Option<String>,
    style: StyleProps,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render as `tag` instead of the primitive's default tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn style_props(&self) -> &StyleProps {
        &self.style
    }

    /// Build props from a JSON-shaped object. `as`, `className` and `children` are
    /// reserved; every recognized style prop name is parsed into a token, anything
    /// else becomes a native attribute.
    pub fn from_json(value: &Value) -> Result<Props, PropsError> {
        let map = as_object(value)?;
        let (style, rest) = StyleProps::from_json(map, &StyleProp::ALL)?;
        Props::from_parts(style, rest)
    }

    fn from_parts(style: StyleProps, rest: Map<String, Value>) -> Result<Props, PropsError> {
        let mut props = Props::new().style(style);
        for (name, value) in rest {
            match name.as_str() {
                "as" => match &value {
                    Value::String(tag) => props.tag = Some(tag.parse()?),
                    Value::Null => {}
                    other => {
                        return Err(PropsError::InvalidValue {
                            prop: name,
                            found: json_type_name(other),
                        });
                    }
                },
                // `class` is the native spelling; both merge after the resolved classes
                "className" | "class" => match value {
                    Value::String(class_name) => {
                        props.class_name = Some(match props.class_name.take() {
                            Some(existing) => format!("{} {}", existing, class_name),
                            None => class_name,
                        });
                    }
                    Value::Null => {}
                    other => return Err(PropsError::InvalidClassName(json_type_name(&other))),
                },
                "children" => props.children.extend(children_from_json(value)?),
                _ => {
                    if let Some(attribute) = attribute_from_json(&name, value) {
                        props.attributes.insert(name, attribute);
                    }
                }
            }
        }
        Ok(props)
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, PropsError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(PropsError::NotAnObject(json_type_name(other))),
    }
}

fn children_from_json(value: Value) -> Result<Vec<Node>, PropsError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(text) => Ok(vec![Node::Text(text)]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(Node::Text(text)),
                _ => Err(PropsError::InvalidChildren),
            })
            .collect(),
        _ => Err(PropsError::InvalidChildren),
    }
}

// `aria-*` and `data-*` take string booleans. Elsewhere `true` is a present flag
// and `false` omits the attribute. `null` always omits it.
fn attribute_from_json(name: &str, value: Value) -> Option<String> {
    let stringly = name.starts_with("aria-") || name.starts_with("data-");
    match value {
        Value::Null => None,
        Value::Bool(flag) if stringly => Some(flag.to_string()),
        Value::Bool(false) => None,
        Value::Bool(true) => Some(String::new()),
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// A design-system primitive: a theme, the style props it recognizes, its base
/// classes and default tag.
#[derive(Clone, Copy, Debug)]
pub struct Primitive<'t> {
    name: &'static str,
    theme: &'t Theme,
    recognized: &'static [StyleProp],
    base_class: &'static str,
    default_tag: Tag,
}

impl<'t> Primitive<'t> {
    pub fn new(name: &'static str, theme: &'t Theme, recognized: &'static [StyleProp]) -> Self {
        Self {
            name,
            theme,
            recognized,
            base_class: "",
            default_tag: Tag::Div,
        }
    }

    pub fn default_tag(mut self, tag: Tag) -> Self {
        self.default_tag = tag;
        self
    }

    /// Classes emitted before the resolved ones.
    pub fn base_class(mut self, base_class: &'static str) -> Self {
        self.base_class = base_class;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn recognized(&self) -> &'static [StyleProp] {
        self.recognized
    }

    pub fn recognizes(&self, prop: StyleProp) -> bool {
        self.recognized.contains(&prop)
    }

    /// Base classes, then resolved style classes, then the user's `className`.
    pub fn class_for(&self, props: &Props) -> ClassString {
        let resolved = resolve_recognized(self.theme, &props.style, self.recognized);
        ClassString::from_parts([
            self.base_class,
            resolved.as_str(),
            props.class_name.as_deref().unwrap_or_default(),
        ])
    }

    pub fn render(&self, props: Props) -> Element {
        self.render_into(props)
    }

    /// Render into any host. Style props this primitive does not recognize are
    /// forwarded as attributes after the native ones.
    pub fn render_into<H: ClassHost>(&self, props: Props) -> H {
        let class = self.class_for(&props);
        let Props {
            tag,
            style,
            attributes,
            children,
            ..
        } = props;
        let tag = tag.unwrap_or(self.default_tag);
        log::trace!("Rendering {} as <{}> with class '{}'", self.name, tag.as_str(), class);

        let mut host = H::create(tag).class(class.as_str());
        for (name, value) in &attributes {
            host = host.attr(name, value);
        }
        for (prop, value) in style.iter().filter(|(prop, _)| !self.recognizes(*prop)) {
            host = host.attr(prop.name(), &value.attribute_value());
        }
        for child in children {
            host = host.child(child);
        }
        host
    }

    /// Render from a JSON-shaped props object. Style prop names outside this
    /// primitive's recognized set are forwarded verbatim.
    pub fn render_json(&self, value: &Value) -> Result<Element, PropsError> {
        let map = as_object(value)?;
        let (style, rest) = StyleProps::from_json(map, self.recognized)?;
        Ok(self.render(Props::from_parts(style, rest)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::BOX_PROPS;
    use crate::tokens::*;
    use serde_json::json;

    #[test]
    fn user_class_comes_last() {
        let theme = Theme::orbit();
        let primitive = Primitive::new("Box", &theme, BOX_PROPS).base_class("relative");
        let props = Props::new()
            .style(StyleProps::new().padding(SpacingToken::S2))
            .class_name("p-0 shadow");
        assert_eq!(primitive.class_for(&props).as_str(), "relative p-2 p-0 shadow");
    }

    #[test]
    fn native_attributes_and_children_pass_through() {
        let theme = Theme::orbit();
        let element = Primitive::new("Box", &theme, BOX_PROPS).render(
            Props::new()
                .tag(Tag::Section)
                .attr("id", "hero")
                .child("Welcome"),
        );
        assert_eq!(element.tag(), Tag::Section);
        assert_eq!(element.attribute("id"), Some("hero"));
        assert_eq!(element.to_html(), r#"<section id="hero">Welcome</section>"#);
    }

    #[test]
    fn unrecognized_style_props_are_forwarded() {
        let theme = Theme::orbit();
        let primitive = Primitive::new("Label", &theme, &[StyleProp::Color]);
        let element = primitive.render(Props::new().style(
            StyleProps::new()
                .color(ColorToken::Danger)
                .padding(SpacingToken::S4),
        ));
        assert_eq!(element.class_name().as_str(), "text-red-500 dark:text-red-400");
        assert_eq!(element.attribute("padding"), Some("spacing-4"));
    }

    #[test]
    fn json_props_split_into_style_native_and_children() {
        let theme = Theme::orbit();
        let element = Primitive::new("Box", &theme, BOX_PROPS)
            .render_json(&json!({
                "as": "nav",
                "padding": "spacing-3",
                "className": "sticky",
                "aria-label": "Main",
                "hidden": false,
                "draggable": true,
                "tabIndex": 0,
                "children": ["Home", "Pricing"],
            }))
            .unwrap();
        assert_eq!(element.tag(), Tag::Nav);
        assert_eq!(element.class_name().as_str(), "p-3 sticky");
        assert_eq!(element.attribute("aria-label"), Some("Main"));
        assert_eq!(element.attribute("hidden"), None);
        assert_eq!(element.attribute("draggable"), Some(""));
        assert_eq!(element.attribute("tabIndex"), Some("0"));
        assert_eq!(element.children().len(), 2);
    }

    #[test]
    fn aria_and_data_booleans_are_written_as_strings() {
        let theme = Theme::orbit();
        let element = Primitive::new("Box", &theme, BOX_PROPS)
            .render_json(&json!({
                "aria-expanded": false,
                "data-open": false,
                "aria-hidden": true,
                "disabled": false,
                "padding": "spacing-2",
            }))
            .unwrap();
        assert_eq!(element.attribute("aria-expanded"), Some("false"));
        assert_eq!(element.attribute("data-open"), Some("false"));
        assert_eq!(element.attribute("aria-hidden"), Some("true"));
        assert_eq!(element.attribute("disabled"), None);
        assert_eq!(
            element.to_html(),
            r#"<div class="p-2" aria-expanded="false" aria-hidden="true" data-open="false"></div>"#
        );
    }

    #[test]
    fn native_class_merges_after_resolved_classes() {
        let theme = Theme::orbit();
        let primitive = Primitive::new("Box", &theme, BOX_PROPS);
        let element = primitive
            .render_json(&json!({ "class": "user", "padding": "spacing-2" }))
            .unwrap();
        assert_eq!(element.to_html(), r#"<div class="p-2 user"></div>"#);
        assert_eq!(element.attribute("class"), None);

        let both = primitive
            .render_json(&json!({ "className": "a", "class": "b" }))
            .unwrap();
        let classes: Vec<&str> = both.class_name().classes().collect();
        assert_eq!(classes.len(), 2);
        assert!(classes.contains(&"a") && classes.contains(&"b"));
    }

    #[test]
    fn json_style_props_outside_the_set_stay_verbatim() {
        let theme = Theme::orbit();
        let element = Primitive::new("Label", &theme, &[StyleProp::Color])
            .render_json(&json!({ "padding": "not-a-token", "color": "text" }))
            .unwrap();
        assert_eq!(element.attribute("padding"), Some("not-a-token"));
        assert_eq!(element.class_name().as_str(), "text-gray-900 dark:text-white");
    }

    #[test]
    fn json_errors() {
        let theme = Theme::orbit();
        let primitive = Primitive::new("Box", &theme, BOX_PROPS);
        assert_eq!(
            primitive.render_json(&json!("div")).unwrap_err(),
            PropsError::NotAnObject("a string")
        );
        assert_eq!(
            primitive.render_json(&json!({ "as": "marquee" })).unwrap_err(),
            PropsError::UnknownTag("marquee".to_string())
        );
        assert_eq!(
            primitive.render_json(&json!({ "className": 3 })).unwrap_err(),
            PropsError::InvalidClassName("a number")
        );
        assert_eq!(
            primitive.render_json(&json!({ "children": [1] })).unwrap_err(),
            PropsError::InvalidChildren
        );
    }

    #[test]
    fn props_from_json_keeps_all_style_props() {
        let props = Props::from_json(&json!({ "fontSize": "lg", "padding": "spacing-1" })).unwrap();
        assert_eq!(props.style_props().len(), 2);
    }
}
