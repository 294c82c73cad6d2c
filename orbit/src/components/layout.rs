// Layout Components
// Box and Stack primitives, plus the Card preset built on Box

use super::primitive::{Primitive, Props};
use crate::element::{Element, Node};
use crate::props::{StyleProps, BOX_PROPS};
use crate::tokens::*;

/// A `div` that understands color, spacing, radius and flex props.
pub fn create_box(theme: &Theme) -> Primitive<'_> {
    Primitive::new("Box", theme, BOX_PROPS)
}

/// A vertical flex container. Pass `flexDirection` to lay children out in a row.
pub fn create_stack(theme: &Theme) -> Primitive<'_> {
    Primitive::new("Stack", theme, BOX_PROPS).base_class("flex flex-col")
}

/// Surface treatment of a card, as (background, border color) roles plus one plain
/// class for border width or elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardVariant {
    /// `transparent` on `border`, 1px border.
    Default,
    /// `surface`, no visible border, `shadow-md`.
    Elevated,
    /// `transparent` on `text-secondary`, 2px border.
    Outlined,
    /// `card` background and border.
    Filled,
}

/// Card padding: `spacing-3`, `spacing-4` or `spacing-6`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

pub struct CardBuilder<'t> {
    theme: &'t Theme,
    variant: CardVariant,
    size: CardSize,
    class_name: Option<String>,
    children: Vec<Node>,
}

impl<'t> CardBuilder<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            variant: CardVariant::Default,
            size: CardSize::Medium,
            class_name: None,
            children: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn build(self) -> Element {
        let padding = match self.size {
            CardSize::Small => SpacingToken::S3,
            CardSize::Medium => SpacingToken::S4,
            CardSize::Large => SpacingToken::S6,
        };

        let (background, border) = match self.variant {
            CardVariant::Default => (ColorToken::Transparent, ColorToken::Border),
            CardVariant::Elevated => (ColorToken::Surface, ColorToken::Transparent),
            CardVariant::Outlined => (ColorToken::Transparent, ColorToken::TextSecondary),
            CardVariant::Filled => (ColorToken::Card, ColorToken::Card),
        };

        let style = StyleProps::new()
            .display(DisplayMode::Flex)
            .flex_direction(FlexDirection::Column)
            .gap(SpacingToken::S2)
            .padding(padding)
            .border_radius(RadiusToken::Xl)
            .background_color(background)
            .border_color(border);

        // Border width and elevation have no token category, so they are plain classes
        let mut class_name = match self.variant {
            CardVariant::Elevated => String::from("shadow-md"),
            CardVariant::Outlined => String::from("border-2"),
            _ => String::from("border"),
        };
        if let Some(extra) = self.class_name {
            class_name.push(' ');
            class_name.push_str(&extra);
        }

        create_box(self.theme).render(
            Props::new()
                .style(style)
                .class_name(class_name)
                .children(self.children),
        )
    }
}

// Convenience function
pub fn card(theme: &Theme) -> CardBuilder<'_> {
    CardBuilder::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, Responsive};
    use crate::element::Tag;
    use serde_json::json;

    #[test]
    fn box_renders_div_with_resolved_classes() {
        let theme = Theme::orbit();
        let element = create_box(&theme)
            .render_json(&json!({ "padding": "spacing-3", "alignItems": "center", "borderRadius": "lg" }))
            .unwrap();
        assert_eq!(element.tag(), Tag::Div);
        assert_eq!(element.to_html(), r#"<div class="p-3 rounded-lg items-center"></div>"#);
    }

    #[test]
    fn box_ignores_typography_props() {
        let theme = Theme::orbit();
        let element = create_box(&theme)
            .render_json(&json!({ "fontSize": "lg", "margin": "spacing-1" }))
            .unwrap();
        assert_eq!(element.class_name().as_str(), "m-1");
        assert_eq!(element.attribute("fontSize"), Some("lg"));
    }

    #[test]
    fn stack_base_classes_come_first_and_direction_can_follow() {
        let theme = Theme::orbit();
        let element = create_stack(&theme).render(Props::new().style(
            StyleProps::new()
                .flex_direction(Responsive::breakpoints().at(Breakpoint::Md, FlexDirection::Row))
                .gap(SpacingToken::S4),
        ));
        assert_eq!(element.class_name().as_str(), "flex flex-col gap-4 md:flex-row");
    }

    #[test]
    fn card_variants_map_to_tokens() {
        let theme = Theme::orbit();
        let filled = card(&theme)
            .variant(CardVariant::Filled)
            .size(CardSize::Small)
            .child("Revenue")
            .build();
        let classes: Vec<&str> = filled.class_name().classes().collect();
        assert!(classes.contains(&"p-3"));
        assert!(classes.contains(&"bg-gray-100"));
        assert!(classes.contains(&"dark:bg-polar-800"));
        assert!(classes.contains(&"rounded-xl"));
        assert_eq!(classes.last(), Some(&"border"));
        assert_eq!(filled.children().len(), 1);

        let elevated = card(&theme).variant(CardVariant::Elevated).class_name("w-full").build();
        assert!(elevated.class_name().as_str().ends_with("shadow-md w-full"));
    }
}
