// Spacing Token System
// One scale shared by padding, margin and gap

use crate::breakpoint::ClassTable;
use crate::props::StyleProp;

token_enum! {
    pub enum SpacingToken in "spacing" {
        S0 => "spacing-0",
        S1 => "spacing-1",
        S2 => "spacing-2",
        S3 => "spacing-3",
        S4 => "spacing-4",
        S5 => "spacing-5",
        S6 => "spacing-6",
        S8 => "spacing-8",
        S10 => "spacing-10",
        S12 => "spacing-12",
        S16 => "spacing-16",
    }
}

pub type SpacingRow = [ClassTable; SpacingToken::COUNT];

// Must list the scale in `SpacingToken` declaration order
macro_rules! spacing_row {
    ($prefix:literal) => {
        [
            class_table!($prefix, "0"),
            class_table!($prefix, "1"),
            class_table!($prefix, "2"),
            class_table!($prefix, "3"),
            class_table!($prefix, "4"),
            class_table!($prefix, "5"),
            class_table!($prefix, "6"),
            class_table!($prefix, "8"),
            class_table!($prefix, "10"),
            class_table!($prefix, "12"),
            class_table!($prefix, "16"),
        ]
    };
}

#[derive(Debug)]
pub struct SpacingScale {
    pub padding: SpacingRow,
    pub padding_top: SpacingRow,
    pub padding_right: SpacingRow,
    pub padding_bottom: SpacingRow,
    pub padding_left: SpacingRow,
    pub padding_horizontal: SpacingRow,
    pub padding_vertical: SpacingRow,
    pub margin: SpacingRow,
    pub margin_top: SpacingRow,
    pub margin_right: SpacingRow,
    pub margin_bottom: SpacingRow,
    pub margin_left: SpacingRow,
    pub margin_horizontal: SpacingRow,
    pub margin_vertical: SpacingRow,
    pub gap: SpacingRow,
    pub row_gap: SpacingRow,
    pub column_gap: SpacingRow,
}

impl SpacingScale {
    pub fn row(&self, prop: StyleProp) -> Option<&SpacingRow> {
        let row = match prop {
            StyleProp::Padding => &self.padding,
            StyleProp::PaddingTop => &self.padding_top,
            StyleProp::PaddingRight => &self.padding_right,
            StyleProp::PaddingBottom => &self.padding_bottom,
            StyleProp::PaddingLeft => &self.padding_left,
            StyleProp::PaddingHorizontal => &self.padding_horizontal,
            StyleProp::PaddingVertical => &self.padding_vertical,
            StyleProp::Margin => &self.margin,
            StyleProp::MarginTop => &self.margin_top,
            StyleProp::MarginRight => &self.margin_right,
            StyleProp::MarginBottom => &self.margin_bottom,
            StyleProp::MarginLeft => &self.margin_left,
            StyleProp::MarginHorizontal => &self.margin_horizontal,
            StyleProp::MarginVertical => &self.margin_vertical,
            StyleProp::Gap => &self.gap,
            StyleProp::RowGap => &self.row_gap,
            StyleProp::ColumnGap => &self.column_gap,
            _ => return None,
        };
        Some(row)
    }
}

pub static ORBIT_SPACING: SpacingScale = SpacingScale {
    padding: spacing_row!("p"),
    padding_top: spacing_row!("pt"),
    padding_right: spacing_row!("pr"),
    padding_bottom: spacing_row!("pb"),
    padding_left: spacing_row!("pl"),
    padding_horizontal: spacing_row!("px"),
    padding_vertical: spacing_row!("py"),
    margin: spacing_row!("m"),
    margin_top: spacing_row!("mt"),
    margin_right: spacing_row!("mr"),
    margin_bottom: spacing_row!("mb"),
    margin_left: spacing_row!("ml"),
    margin_horizontal: spacing_row!("mx"),
    margin_vertical: spacing_row!("my"),
    gap: spacing_row!("gap"),
    row_gap: spacing_row!("gap-y"),
    column_gap: spacing_row!("gap-x"),
};
