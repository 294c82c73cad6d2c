// Layout Keywords
// Display and flexbox values. These are not themeable, so their tables are fixed.

use crate::breakpoint::ClassTable;

token_enum! {
    pub enum DisplayMode in "layout" {
        Block => "block",
        InlineBlock => "inline-block",
        Inline => "inline",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        Hidden => "hidden",
    }
}

token_enum! {
    pub enum FlexDirection in "layout" {
        Row => "row",
        Column => "column",
        RowReverse => "row-reverse",
        ColumnReverse => "column-reverse",
    }
}

token_enum! {
    pub enum FlexWrap in "layout" {
        Wrap => "wrap",
        NoWrap => "nowrap",
        WrapReverse => "wrap-reverse",
    }
}

token_enum! {
    pub enum AlignItems in "layout" {
        Start => "start",
        End => "end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

token_enum! {
    pub enum JustifyContent in "layout" {
        Start => "start",
        End => "end",
        Center => "center",
        Between => "between",
        Around => "around",
        Evenly => "evenly",
    }
}

static DISPLAY: [ClassTable; DisplayMode::COUNT] = [
    class_table!(bare "block"),
    class_table!(bare "inline-block"),
    class_table!(bare "inline"),
    class_table!(bare "flex"),
    class_table!(bare "inline-flex"),
    class_table!(bare "grid"),
    class_table!(bare "hidden"),
];

static FLEX_DIRECTION: [ClassTable; FlexDirection::COUNT] = [
    class_table!(bare "flex-row"),
    class_table!(bare "flex-col"),
    class_table!(bare "flex-row-reverse"),
    class_table!(bare "flex-col-reverse"),
];

static FLEX_WRAP: [ClassTable; FlexWrap::COUNT] = [
    class_table!(bare "flex-wrap"),
    class_table!(bare "flex-nowrap"),
    class_table!(bare "flex-wrap-reverse"),
];

static ALIGN_ITEMS: [ClassTable; AlignItems::COUNT] = [
    class_table!("items", "start"),
    class_table!("items", "end"),
    class_table!("items", "center"),
    class_table!("items", "baseline"),
    class_table!("items", "stretch"),
];

static JUSTIFY_CONTENT: [ClassTable; JustifyContent::COUNT] = [
    class_table!("justify", "start"),
    class_table!("justify", "end"),
    class_table!("justify", "center"),
    class_table!("justify", "between"),
    class_table!("justify", "around"),
    class_table!("justify", "evenly"),
];

impl DisplayMode {
    pub fn classes(self) -> &'static ClassTable {
        &DISPLAY[self.index()]
    }
}

impl FlexDirection {
    pub fn classes(self) -> &'static ClassTable {
        &FLEX_DIRECTION[self.index()]
    }
}

impl FlexWrap {
    pub fn classes(self) -> &'static ClassTable {
        &FLEX_WRAP[self.index()]
    }
}

impl AlignItems {
    pub fn classes(self) -> &'static ClassTable {
        &ALIGN_ITEMS[self.index()]
    }
}

impl JustifyContent {
    pub fn classes(self) -> &'static ClassTable {
        &JUSTIFY_CONTENT[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn keyword_classes() {
        assert_eq!(DisplayMode::Hidden.classes().at(Breakpoint::Md), "md:hidden");
        assert_eq!(FlexDirection::Column.classes().at(Breakpoint::Default), "flex-col");
        assert_eq!(AlignItems::Center.classes().at(Breakpoint::Default), "items-center");
        assert_eq!(JustifyContent::Between.classes().at(Breakpoint::Lg), "lg:justify-between");
        assert_eq!(FlexWrap::NoWrap.classes().at(Breakpoint::Sm), "sm:flex-nowrap");
    }

    #[test]
    fn same_key_parses_per_keyword_set() {
        assert_eq!("start".parse::<AlignItems>().unwrap(), AlignItems::Start);
        assert_eq!("start".parse::<JustifyContent>().unwrap(), JustifyContent::Start);
        assert!("between".parse::<AlignItems>().is_err());
    }
}
