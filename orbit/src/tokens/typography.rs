// Typography Keywords

use crate::breakpoint::ClassTable;

token_enum! {
    pub enum FontSize in "typography" {
        Xs => "xs",
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
        Xxxl => "3xl",
        Xxxxl => "4xl",
    }
}

token_enum! {
    pub enum FontWeight in "typography" {
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

token_enum! {
    pub enum TextAlign in "typography" {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
}

static FONT_SIZE: [ClassTable; FontSize::COUNT] = [
    class_table!("text", "xs"),
    class_table!("text", "sm"),
    class_table!("text", "base"),
    class_table!("text", "lg"),
    class_table!("text", "xl"),
    class_table!("text", "2xl"),
    class_table!("text", "3xl"),
    class_table!("text", "4xl"),
];

static FONT_WEIGHT: [ClassTable; FontWeight::COUNT] = [
    class_table!("font", "light"),
    class_table!("font", "normal"),
    class_table!("font", "medium"),
    class_table!("font", "semibold"),
    class_table!("font", "bold"),
];

static TEXT_ALIGN: [ClassTable; TextAlign::COUNT] = [
    class_table!("text", "left"),
    class_table!("text", "center"),
    class_table!("text", "right"),
    class_table!("text", "justify"),
];

impl FontSize {
    pub fn classes(self) -> &'static ClassTable {
        &FONT_SIZE[self.index()]
    }
}

impl FontWeight {
    pub fn classes(self) -> &'static ClassTable {
        &FONT_WEIGHT[self.index()]
    }
}

impl TextAlign {
    pub fn classes(self) -> &'static ClassTable {
        &TEXT_ALIGN[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn typography_classes() {
        assert_eq!(FontSize::Xxl.classes().at(Breakpoint::Default), "text-2xl");
        assert_eq!(FontWeight::Semibold.classes().at(Breakpoint::Md), "md:font-semibold");
        assert_eq!(TextAlign::Center.classes().at(Breakpoint::Default), "text-center");
    }
}
