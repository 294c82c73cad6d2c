// Corner Radius Token System

use crate::breakpoint::ClassTable;
use crate::props::StyleProp;

token_enum! {
    pub enum RadiusToken in "radii" {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
        Xxxl => "3xl",
        Full => "full",
    }
}

pub type RadiusRow = [ClassTable; RadiusToken::COUNT];

macro_rules! radius_row {
    ($prefix:literal) => {
        [
            class_table!($prefix, "none"),
            class_table!($prefix, "sm"),
            class_table!($prefix, "md"),
            class_table!($prefix, "lg"),
            class_table!($prefix, "xl"),
            class_table!($prefix, "2xl"),
            class_table!($prefix, "3xl"),
            class_table!($prefix, "full"),
        ]
    };
}

#[derive(Debug)]
pub struct RadiusScale {
    pub all: RadiusRow,
    pub top_left: RadiusRow,
    pub top_right: RadiusRow,
    pub bottom_right: RadiusRow,
    pub bottom_left: RadiusRow,
}

impl RadiusScale {
    pub fn row(&self, prop: StyleProp) -> Option<&RadiusRow> {
        match prop {
            StyleProp::BorderRadius => Some(&self.all),
            StyleProp::BorderTopLeftRadius => Some(&self.top_left),
            StyleProp::BorderTopRightRadius => Some(&self.top_right),
            StyleProp::BorderBottomRightRadius => Some(&self.bottom_right),
            StyleProp::BorderBottomLeftRadius => Some(&self.bottom_left),
            _ => None,
        }
    }
}

pub static ORBIT_RADII: RadiusScale = RadiusScale {
    all: radius_row!("rounded"),
    top_left: radius_row!("rounded-tl"),
    top_right: radius_row!("rounded-tr"),
    bottom_right: radius_row!("rounded-br"),
    bottom_left: radius_row!("rounded-bl"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn corner_rows_use_corner_prefix() {
        assert_eq!(ORBIT_RADII.all[RadiusToken::Lg.index()].at(Breakpoint::Default), "rounded-lg");
        assert_eq!(
            ORBIT_RADII.bottom_left[RadiusToken::Xxl.index()].at(Breakpoint::Xl),
            "xl:rounded-bl-2xl"
        );
        assert_eq!("full".parse::<RadiusToken>().unwrap(), RadiusToken::Full);
    }
}
