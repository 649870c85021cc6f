//! Chart-ready views of the aggregates. The frontend only draws what these
//! functions return.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::aggregates::{CategoryTotals, MonthlyTotals};

/// Slice colours, cycled in category order
pub const PALETTE: [(u8, u8, u8); 6] = [
    (0x88, 0x84, 0xd8),
    (0x82, 0xca, 0x9d),
    (0xff, 0xc6, 0x58),
    (0xff, 0x7f, 0x50),
    (0xa2, 0x8f, 0xd0),
    (0xf4, 0xa2, 0x61),
];

pub fn palette_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// CSS colour for legend swatches, e.g. `#8884d8`
pub fn palette_hex(index: usize) -> String {
    let (r, g, b) = palette_color(index);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the whole pie, 0.0 when everything is zero
    pub share: f64,
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

pub fn pie_slices(totals: &CategoryTotals) -> Vec<PieSlice> {
    let whole = totals.values().fold(Decimal::ZERO, |sum, v| sum.saturating_add(*v));
    totals
        .iter()
        .enumerate()
        .map(|(index, (category, total))| {
            let share = if whole.is_zero() { Decimal::ZERO } else { *total / whole };
            PieSlice {
                label: category.label().to_string(),
                value: total.to_f64().unwrap_or_default(),
                share: share.to_f64().unwrap_or_default(),
                color: palette_color(index),
            }
        })
        .collect()
}

pub fn monthly_points(totals: &MonthlyTotals) -> Vec<TrendPoint> {
    totals
        .iter()
        .map(|(month, total)| TrendPoint {
            label: month.label(),
            value: total.to_f64().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::MonthKey;
    use crate::models::Category;

    #[test]
    fn test_pie_slices_shares_and_colors() {
        let mut totals = CategoryTotals::new();
        totals.insert(Category::Groceries, Decimal::from(300));
        totals.insert(Category::Transport, Decimal::from(100));

        let slices = pie_slices(&totals);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Groceries");
        assert_eq!(slices[0].value, 300.0);
        assert!((slices[0].share - 0.75).abs() < 1e-9);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[1].color, PALETTE[1]);
    }

    #[test]
    fn test_pie_slices_all_zero() {
        let mut totals = CategoryTotals::new();
        totals.insert(Category::Other, Decimal::ZERO);
        assert_eq!(pie_slices(&totals)[0].share, 0.0);
        assert!(pie_slices(&CategoryTotals::new()).is_empty());
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_hex(0), "#8884d8");
        assert_eq!(palette_hex(6), "#8884d8");
        assert_eq!(palette_hex(5), "#f4a261");
    }

    #[test]
    fn test_monthly_points() {
        let mut totals = MonthlyTotals::new();
        totals.insert(MonthKey { year: 2024, month: 2 }, Decimal::from(50));
        totals.insert(MonthKey { year: 2024, month: 1 }, Decimal::from(20));
        let points = monthly_points(&totals);
        assert_eq!(points[0], TrendPoint { label: "Jan 2024".into(), value: 20.0 });
        assert_eq!(points[1].label, "Feb 2024");
    }
}
