// Style Props
// The closed set of prop names the property resolver recognizes

use crate::breakpoint::Responsive;
use crate::error::PropsError;
use crate::tokens::*;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;

macro_rules! style_props {
    ($( $variant:ident => $name:literal, $category:ident, $token:ident($ty:ty), $setter:ident; )+) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum StyleProp {
            $( $variant ),+
        }

        const STYLE_PROP_COUNT: usize = [$( $name ),+].len();

        impl StyleProp {
            /// Recognized props in resolution order.
            pub const ALL: [StyleProp; STYLE_PROP_COUNT] = [$( StyleProp::$variant ),+];

            /// The prop name as written in component props (camelCase).
            pub const fn name(self) -> &'static str {
                match self {
                    $( StyleProp::$variant => $name ),+
                }
            }

            pub const fn category(self) -> Category {
                match self {
                    $( StyleProp::$variant => Category::$category ),+
                }
            }

            /// Parse a token key for this prop. `None` when the key is not part of
            /// the prop's token set.
            pub fn parse_token(self, key: &str) -> Option<Token> {
                match self {
                    $( StyleProp::$variant => <$ty as TokenKey>::parse(key).map(Token::$token) ),+
                }
            }

            /// Every token this prop accepts.
            pub fn tokens(self) -> Vec<Token> {
                match self {
                    $( StyleProp::$variant => <$ty as TokenKey>::ALL.iter().copied().map(Token::$token).collect() ),+
                }
            }
        }

        impl StyleProps {
            $(
                pub fn $setter(self, value: impl Into<Responsive<$ty>>) -> Self {
                    self.with(StyleProp::$variant, value.into().map(Token::$token))
                }
            )+
        }
    };
}

style_props! {
    Color => "color", Colors, Color(ColorToken), color;
    BackgroundColor => "backgroundColor", Colors, Color(ColorToken), background_color;
    BorderColor => "borderColor", Colors, Color(ColorToken), border_color;
    Padding => "padding", Spacing, Spacing(SpacingToken), padding;
    PaddingTop => "paddingTop", Spacing, Spacing(SpacingToken), padding_top;
    PaddingRight => "paddingRight", Spacing, Spacing(SpacingToken), padding_right;
    PaddingBottom => "paddingBottom", Spacing, Spacing(SpacingToken), padding_bottom;
    PaddingLeft => "paddingLeft", Spacing, Spacing(SpacingToken), padding_left;
    PaddingHorizontal => "paddingHorizontal", Spacing, Spacing(SpacingToken), padding_horizontal;
    PaddingVertical => "paddingVertical", Spacing, Spacing(SpacingToken), padding_vertical;
    Margin => "margin", Spacing, Spacing(SpacingToken), margin;
    MarginTop => "marginTop", Spacing, Spacing(SpacingToken), margin_top;
    MarginRight => "marginRight", Spacing, Spacing(SpacingToken), margin_right;
    MarginBottom => "marginBottom", Spacing, Spacing(SpacingToken), margin_bottom;
    MarginLeft => "marginLeft", Spacing, Spacing(SpacingToken), margin_left;
    MarginHorizontal => "marginHorizontal", Spacing, Spacing(SpacingToken), margin_horizontal;
    MarginVertical => "marginVertical", Spacing, Spacing(SpacingToken), margin_vertical;
    Gap => "gap", Spacing, Spacing(SpacingToken), gap;
    RowGap => "rowGap", Spacing, Spacing(SpacingToken), row_gap;
    ColumnGap => "columnGap", Spacing, Spacing(SpacingToken), column_gap;
    BorderRadius => "borderRadius", Radii, Radius(RadiusToken), border_radius;
    BorderTopLeftRadius => "borderTopLeftRadius", Radii, Radius(RadiusToken), border_top_left_radius;
    BorderTopRightRadius => "borderTopRightRadius", Radii, Radius(RadiusToken), border_top_right_radius;
    BorderBottomRightRadius => "borderBottomRightRadius", Radii, Radius(RadiusToken), border_bottom_right_radius;
    BorderBottomLeftRadius => "borderBottomLeftRadius", Radii, Radius(RadiusToken), border_bottom_left_radius;
    Display => "display", Layout, Display(DisplayMode), display;
    FlexDirection => "flexDirection", Layout, FlexDirection(FlexDirection), flex_direction;
    FlexWrap => "flexWrap", Layout, FlexWrap(FlexWrap), flex_wrap;
    AlignItems => "alignItems", Layout, AlignItems(AlignItems), align_items;
    JustifyContent => "justifyContent", Layout, JustifyContent(JustifyContent), justify_content;
    FontSize => "fontSize", Typography, FontSize(FontSize), font_size;
    FontWeight => "fontWeight", Typography, FontWeight(FontWeight), font_weight;
    TextAlign => "textAlign", Typography, TextAlign(TextAlign), text_align;
}

impl StyleProp {
    pub fn from_name(name: &str) -> Option<StyleProp> {
        StyleProp::ALL.into_iter().find(|prop| prop.name() == name)
    }
}

impl fmt::Display for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognized props of a Box: everything except typography.
pub const BOX_PROPS: &[StyleProp] = &[
    StyleProp::Color,
    StyleProp::BackgroundColor,
    StyleProp::BorderColor,
    StyleProp::Padding,
    StyleProp::PaddingTop,
    StyleProp::PaddingRight,
    StyleProp::PaddingBottom,
    StyleProp::PaddingLeft,
    StyleProp::PaddingHorizontal,
    StyleProp::PaddingVertical,
    StyleProp::Margin,
    StyleProp::MarginTop,
    StyleProp::MarginRight,
    StyleProp::MarginBottom,
    StyleProp::MarginLeft,
    StyleProp::MarginHorizontal,
    StyleProp::MarginVertical,
    StyleProp::Gap,
    StyleProp::RowGap,
    StyleProp::ColumnGap,
    StyleProp::BorderRadius,
    StyleProp::BorderTopLeftRadius,
    StyleProp::BorderTopRightRadius,
    StyleProp::BorderBottomRightRadius,
    StyleProp::BorderBottomLeftRadius,
    StyleProp::Display,
    StyleProp::FlexDirection,
    StyleProp::FlexWrap,
    StyleProp::AlignItems,
    StyleProp::JustifyContent,
];

/// Recognized props of Text: colors, outer spacing and typography.
pub const TEXT_PROPS: &[StyleProp] = &[
    StyleProp::Color,
    StyleProp::BackgroundColor,
    StyleProp::Margin,
    StyleProp::MarginTop,
    StyleProp::MarginRight,
    StyleProp::MarginBottom,
    StyleProp::MarginLeft,
    StyleProp::MarginHorizontal,
    StyleProp::MarginVertical,
    StyleProp::FontSize,
    StyleProp::FontWeight,
    StyleProp::TextAlign,
];

/// Style props of one element, keyed by prop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleProps {
    values: IndexMap<StyleProp, Responsive<Token>>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: StyleProp, value: Responsive<Token>) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProp, value: Responsive<Token>) -> Option<Responsive<Token>> {
        self.values.insert(prop, value)
    }

    pub fn get(&self, prop: StyleProp) -> Option<&Responsive<Token>> {
        self.values.get(&prop)
    }

    pub fn remove(&mut self, prop: StyleProp) -> Option<Responsive<Token>> {
        self.values.shift_remove(&prop)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, &Responsive<Token>)> + '_ {
        self.values.iter().map(|(prop, value)| (*prop, value))
    }

    /// Parse one recognized prop from its JSON value. Token keys that are not part
    /// of the prop's set are dropped with a warning; `Ok(None)` means nothing
    /// resolvable is left.
    pub fn parse_value(prop: StyleProp, value: &Value) -> Result<Option<Responsive<Token>>, PropsError> {
        if value.is_null() {
            return Ok(None);
        }
        let raw = Responsive::from_json(prop.name(), value)?;
        Ok(raw.filter_map(|breakpoint, key| {
            let token = prop.parse_token(&key);
            if token.is_none() {
                log::warn!(
                    "Unresolvable {} token '{}' for prop '{}' at breakpoint '{}', no class emitted",
                    prop.category(),
                    key,
                    prop,
                    breakpoint
                );
            }
            token
        }))
    }

    /// Split a JSON props object into style props (names in `recognized`) and the
    /// remaining entries, which are returned untouched.
    pub fn from_json(
        props: &Map<String, Value>,
        recognized: &[StyleProp],
    ) -> Result<(StyleProps, Map<String, Value>), PropsError> {
        let mut style = StyleProps::new();
        let mut rest = Map::new();
        for (name, value) in props {
            match StyleProp::from_name(name).filter(|prop| recognized.contains(prop)) {
                Some(prop) => {
                    if let Some(value) = Self::parse_value(prop, value)? {
                        style.set(prop, value);
                    }
                }
                None => {
                    rest.insert(name.clone(), value.clone());
                }
            }
        }
        Ok((style, rest))
    }
}

impl Responsive<Token> {
    /// Attribute form of a style value that is forwarded to the element instead of
    /// being resolved: a bare key, or a JSON object keyed by breakpoint.
    pub fn attribute_value(&self) -> String {
        match self {
            Responsive::Bare(token) => token.key().to_string(),
            Responsive::Breakpoints(_) => {
                let entries: Map<String, Value> = self
                    .iter()
                    .map(|(breakpoint, token)| (breakpoint.label().to_string(), Value::from(token.key())))
                    .collect();
                Value::Object(entries).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn names_round_trip() {
        for prop in StyleProp::ALL {
            assert_eq!(StyleProp::from_name(prop.name()), Some(prop));
        }
        assert_eq!(StyleProp::from_name("onClick"), None);
    }

    #[test]
    fn every_prop_has_tokens_in_its_category() {
        let theme = Theme::orbit();
        for prop in StyleProp::ALL {
            let tokens = prop.tokens();
            assert!(!tokens.is_empty());
            for token in tokens {
                assert!(theme.class_table(prop, &token).is_some(), "{} {}", prop, token);
            }
        }
    }

    #[test]
    fn typed_setters_store_tokens() {
        let props = StyleProps::new()
            .padding(SpacingToken::S3)
            .justify_content(Responsive::breakpoints().at(Breakpoint::Lg, JustifyContent::Between));
        assert_eq!(props.len(), 2);
        assert_eq!(
            props.get(StyleProp::Padding),
            Some(&Responsive::Bare(Token::Spacing(SpacingToken::S3)))
        );
    }

    #[test]
    fn from_json_splits_recognized_and_rest() {
        let input = object(json!({
            "padding": "spacing-3",
            "fontSize": "lg",
            "onClick": "submit",
            "data-testid": "card",
        }));
        let (style, rest) = StyleProps::from_json(&input, BOX_PROPS).unwrap();
        assert_eq!(style.len(), 1);
        assert!(style.get(StyleProp::Padding).is_some());
        // fontSize is not a Box prop, so it stays in the rest bag
        assert_eq!(rest.get("fontSize"), Some(&json!("lg")));
        assert_eq!(rest.get("onClick"), Some(&json!("submit")));
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn unknown_token_is_dropped_not_an_error() {
        let input = object(json!({ "padding": "nonexistent-token", "margin": null }));
        let (style, rest) = StyleProps::from_json(&input, BOX_PROPS).unwrap();
        assert!(style.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn partially_unknown_breakpoints_keep_the_rest() {
        let value = StyleProps::parse_value(
            StyleProp::AlignItems,
            &json!({ "default": "center", "md": "sideways" }),
        )
        .unwrap()
        .unwrap();
        let entries: Vec<_> = value.iter().map(|(bp, token)| (bp, *token)).collect();
        assert_eq!(entries, vec![(Breakpoint::Default, Token::AlignItems(AlignItems::Center))]);
    }

    #[test]
    fn malformed_value_is_an_error() {
        let input = object(json!({ "padding": 12 }));
        assert_eq!(
            StyleProps::from_json(&input, BOX_PROPS).unwrap_err(),
            PropsError::InvalidValue {
                prop: "padding".to_string(),
                found: "a number",
            }
        );
    }

    #[test]
    fn attribute_value_of_forwarded_style() {
        assert_eq!(Responsive::Bare(Token::Spacing(SpacingToken::S2)).attribute_value(), "spacing-2");
        let responsive = Responsive::breakpoints()
            .at(Breakpoint::Md, Token::FontSize(FontSize::Lg))
            .at(Breakpoint::Default, Token::FontSize(FontSize::Sm));
        assert_eq!(responsive.attribute_value(), r#"{"default":"sm","md":"lg"}"#);
    }
}
