// Color Token System
// Semantic color roles, each resolving to a light class and its `dark:` counterpart

use crate::breakpoint::ClassTable;
use crate::props::StyleProp;

token_enum! {
    pub enum ColorToken in "colors" {
        Primary => "primary",
        Secondary => "secondary",
        Text => "text",
        TextSecondary => "text-secondary",
        Background => "background",
        Surface => "surface",
        Card => "card",
        Border => "border",
        Success => "success",
        Warning => "warning",
        Danger => "danger",
        Transparent => "transparent",
    }
}

pub type ColorRow = [ClassTable; ColorToken::COUNT];

// Must list the roles in `ColorToken` declaration order
macro_rules! color_row {
    ($prefix:literal) => {
        [
            class_table!($prefix, "blue-500", dark: "blue-400"),
            class_table!($prefix, "gray-500", dark: "polar-500"),
            class_table!($prefix, "gray-900", dark: "white"),
            class_table!($prefix, "gray-500", dark: "polar-400"),
            class_table!($prefix, "white", dark: "polar-950"),
            class_table!($prefix, "gray-50", dark: "polar-900"),
            class_table!($prefix, "gray-100", dark: "polar-800"),
            class_table!($prefix, "gray-200", dark: "polar-700"),
            class_table!($prefix, "emerald-500", dark: "emerald-400"),
            class_table!($prefix, "amber-500", dark: "amber-400"),
            class_table!($prefix, "red-500", dark: "red-400"),
            class_table!($prefix, "transparent"),
        ]
    };
}

#[derive(Debug)]
pub struct ColorScheme {
    pub text: ColorRow,
    pub background: ColorRow,
    pub border: ColorRow,
}

impl ColorScheme {
    pub fn row(&self, prop: StyleProp) -> Option<&ColorRow> {
        match prop {
            StyleProp::Color => Some(&self.text),
            StyleProp::BackgroundColor => Some(&self.background),
            StyleProp::BorderColor => Some(&self.border),
            _ => None,
        }
    }
}

pub static ORBIT_COLORS: ColorScheme = ColorScheme {
    text: color_row!("text"),
    background: color_row!("bg"),
    border: color_row!("border"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn roles_carry_dark_counterpart_at_every_breakpoint() {
        let card = &ORBIT_COLORS.background[ColorToken::Card.index()];
        assert_eq!(card.at(Breakpoint::Default), "bg-gray-100 dark:bg-polar-800");
        assert_eq!(card.at(Breakpoint::Lg), "lg:bg-gray-100 lg:dark:bg-polar-800");
    }

    #[test]
    fn transparent_has_single_class() {
        let border = &ORBIT_COLORS.border[ColorToken::Transparent.index()];
        assert_eq!(border.at(Breakpoint::Default), "border-transparent");
        assert_eq!(border.at(Breakpoint::Sm), "sm:border-transparent");
    }

    #[test]
    fn text_row_uses_text_prefix() {
        let text = &ORBIT_COLORS.text[ColorToken::Text.index()];
        assert_eq!(text.at(Breakpoint::Default), "text-gray-900 dark:text-white");
        assert!(ORBIT_COLORS.row(StyleProp::Padding).is_none());
    }
}
