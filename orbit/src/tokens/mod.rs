// Design Token System for Orbit
// Every category is a closed set of tokens; every (token, property) pair owns a
// pre-generated class table, so any class Orbit can emit is a static string.

/// Builds a [`ClassTable`](crate::breakpoint::ClassTable) at compile time.
///
/// - `class_table!(bare "flex")` emits `flex`, `sm:flex`, ...
/// - `class_table!("p", "3")` emits `p-3`, `sm:p-3`, ...
/// - `class_table!("bg", "white", dark: "polar-950")` emits a light/dark pair per breakpoint
macro_rules! class_table {
    (bare $class:literal) => {
        $crate::breakpoint::ClassTable::new([
            $class,
            concat!("sm:", $class),
            concat!("md:", $class),
            concat!("lg:", $class),
            concat!("xl:", $class),
            concat!("2xl:", $class),
        ])
    };
    ($prefix:literal, $light:literal, dark: $dark:literal) => {
        $crate::breakpoint::ClassTable::new([
            concat!($prefix, "-", $light, " dark:", $prefix, "-", $dark),
            concat!("sm:", $prefix, "-", $light, " sm:dark:", $prefix, "-", $dark),
            concat!("md:", $prefix, "-", $light, " md:dark:", $prefix, "-", $dark),
            concat!("lg:", $prefix, "-", $light, " lg:dark:", $prefix, "-", $dark),
            concat!("xl:", $prefix, "-", $light, " xl:dark:", $prefix, "-", $dark),
            concat!("2xl:", $prefix, "-", $light, " 2xl:dark:", $prefix, "-", $dark),
        ])
    };
    ($prefix:literal, $value:literal) => {
        $crate::breakpoint::ClassTable::new([
            concat!($prefix, "-", $value),
            concat!("sm:", $prefix, "-", $value),
            concat!("md:", $prefix, "-", $value),
            concat!("lg:", $prefix, "-", $value),
            concat!("xl:", $prefix, "-", $value),
            concat!("2xl:", $prefix, "-", $value),
        ])
    };
}

/// Declares a closed token set with its string keys.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $category:literal {
            $( $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const COUNT: usize = [$( $key ),+].len();

            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl $crate::tokens::TokenKey for $name {
            const CATEGORY: &'static str = $category;
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => $key ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::UnknownToken;

            fn from_str(key: &str) -> Result<Self, Self::Err> {
                <$name as $crate::tokens::TokenKey>::parse(key).ok_or_else(|| $crate::error::UnknownToken {
                    category: $category,
                    key: key.to_string(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::tokens::TokenKey::key(*self))
            }
        }
    };
}

pub mod color;
pub mod corner_radius;
pub mod layout;
pub mod spacing;
pub mod theme;
pub mod typography;
pub use color::*;
pub use corner_radius::*;
pub use layout::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;

use crate::props::StyleProp;
use std::fmt;
use std::str::FromStr;

/// A closed set of token keys.
pub trait TokenKey: Copy + 'static {
    const CATEGORY: &'static str;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Colors,
    Spacing,
    Radii,
    Layout,
    Typography,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Colors,
        Category::Spacing,
        Category::Radii,
        Category::Layout,
        Category::Typography,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Spacing => "spacing",
            Category::Radii => "radii",
            Category::Layout => "layout",
            Category::Typography => "typography",
        }
    }

    /// Property variants of this category, in resolution order.
    pub fn variants(self) -> impl Iterator<Item = StyleProp> {
        StyleProp::ALL
            .into_iter()
            .filter(move |prop| prop.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = crate::error::UnknownCategory;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == name)
            .ok_or_else(|| crate::error::UnknownCategory(name.to_string()))
    }
}

/// Any token of any category, as stored on a style prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Color(ColorToken),
    Spacing(SpacingToken),
    Radius(RadiusToken),
    Display(DisplayMode),
    FlexDirection(FlexDirection),
    FlexWrap(FlexWrap),
    AlignItems(AlignItems),
    JustifyContent(JustifyContent),
    FontSize(FontSize),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
}

impl Token {
    pub fn key(self) -> &'static str {
        match self {
            Token::Color(token) => token.key(),
            Token::Spacing(token) => token.key(),
            Token::Radius(token) => token.key(),
            Token::Display(token) => token.key(),
            Token::FlexDirection(token) => token.key(),
            Token::FlexWrap(token) => token.key(),
            Token::AlignItems(token) => token.key(),
            Token::JustifyContent(token) => token.key(),
            Token::FontSize(token) => token.key(),
            Token::FontWeight(token) => token.key(),
            Token::TextAlign(token) => token.key(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

macro_rules! token_from {
    ($( $variant:ident($ty:ty) ),+ $(,)?) => {
        $(
            impl From<$ty> for Token {
                fn from(token: $ty) -> Self {
                    Token::$variant(token)
                }
            }
        )+
    };
}

token_from! {
    Color(ColorToken),
    Spacing(SpacingToken),
    Radius(RadiusToken),
    Display(DisplayMode),
    FlexDirection(FlexDirection),
    FlexWrap(FlexWrap),
    AlignItems(AlignItems),
    JustifyContent(JustifyContent),
    FontSize(FontSize),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
}
