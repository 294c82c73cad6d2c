// Theme = Token Registry
// Maps (property, token, breakpoint) to the literal class the CSS framework knows about

use super::*;
use crate::breakpoint::{Breakpoint, ClassTable};
use crate::props::StyleProp;
use indexmap::IndexSet;

/// A token registry. Themeable categories (colors, spacing, radii) point at static
/// class tables; layout and typography keywords always use Orbit's fixed tables.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    name: &'static str,
    colors: &'static ColorScheme,
    spacing: &'static SpacingScale,
    radii: &'static RadiusScale,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::orbit()
    }
}

impl Theme {
    pub const fn new(
        name: &'static str,
        colors: &'static ColorScheme,
        spacing: &'static SpacingScale,
        radii: &'static RadiusScale,
    ) -> Self {
        Self {
            name,
            colors,
            spacing,
            radii,
        }
    }

    /// The built-in Orbit theme.
    pub const fn orbit() -> Self {
        Theme::new("orbit", &ORBIT_COLORS, &ORBIT_SPACING, &ORBIT_RADII)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Class table of a token for one property. `None` when the token does not
    /// belong to the property's category.
    pub fn class_table(&self, prop: StyleProp, token: &Token) -> Option<&'static ClassTable> {
        let colors: &'static ColorScheme = self.colors;
        let spacing: &'static SpacingScale = self.spacing;
        let radii: &'static RadiusScale = self.radii;
        match *token {
            Token::Color(token) => colors.row(prop).map(|row| &row[token.index()]),
            Token::Spacing(token) => spacing.row(prop).map(|row| &row[token.index()]),
            Token::Radius(token) => radii.row(prop).map(|row| &row[token.index()]),
            Token::Display(token) if prop == StyleProp::Display => Some(token.classes()),
            Token::FlexDirection(token) if prop == StyleProp::FlexDirection => Some(token.classes()),
            Token::FlexWrap(token) if prop == StyleProp::FlexWrap => Some(token.classes()),
            Token::AlignItems(token) if prop == StyleProp::AlignItems => Some(token.classes()),
            Token::JustifyContent(token) if prop == StyleProp::JustifyContent => Some(token.classes()),
            Token::FontSize(token) if prop == StyleProp::FontSize => Some(token.classes()),
            Token::FontWeight(token) if prop == StyleProp::FontWeight => Some(token.classes()),
            Token::TextAlign(token) if prop == StyleProp::TextAlign => Some(token.classes()),
            _ => None,
        }
    }

    /// String-keyed lookup of the `default` class for `(category, token, variant)`,
    /// where `variant` is a prop name such as `paddingTop`. Misses return `None`.
    pub fn lookup(&self, category: Category, token: &str, variant: &str) -> Option<&'static str> {
        self.lookup_at(category, token, variant, Breakpoint::Default)
    }

    pub fn lookup_at(
        &self,
        category: Category,
        token: &str,
        variant: &str,
        breakpoint: Breakpoint,
    ) -> Option<&'static str> {
        let prop = StyleProp::from_name(variant).filter(|prop| prop.category() == category)?;
        let token = prop.parse_token(token)?;
        self.class_table(prop, &token).map(|table| table.at(breakpoint))
    }

    /// Token keys of a category in declaration order. Layout and typography span
    /// several keyword sets; a key shared between them is listed once.
    pub fn tokens(&self, category: Category) -> Vec<&'static str> {
        let keys: IndexSet<&'static str> = category
            .variants()
            .flat_map(|prop| self.prop_tokens(prop))
            .collect();
        keys.into_iter().collect()
    }

    /// Token keys accepted by a property, in declaration order.
    pub fn prop_tokens(&self, prop: StyleProp) -> Vec<&'static str> {
        prop.tokens().into_iter().map(Token::key).collect()
    }

    /// Every class this theme can emit, deduplicated, in a stable order.
    pub fn safelist(&self) -> Vec<&'static str> {
        let mut classes = IndexSet::new();
        for prop in StyleProp::ALL {
            for token in prop.tokens() {
                let Some(table) = self.class_table(prop, &token) else {
                    continue;
                };
                for (_, entry) in table.iter() {
                    classes.extend(entry.split_whitespace());
                }
            }
        }
        classes.into_iter().collect()
    }
}
