// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Text and JSON presentation of a footprint result.

use footprint_engine::{Category, EmissionResult, FactorTable, RegionFactors, UsageInput};
use serde::Serialize;

/// Width of the longest bar in the chart, in characters
pub const BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// JSON document emitted by `calculate --format json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a UsageInput,
    pub factors: &'a RegionFactors,
    pub result: EmissionResult,
}

pub fn to_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// One bar per category, scaled so the largest category fills `width`.
///
/// Non-positive values draw an empty bar.
pub fn bar_chart(result: &EmissionResult, width: usize) -> String {
    let (_, max) = result.largest();

    let mut out = String::new();
    for (category, tonnes) in result.breakdown() {
        let len = if max > 0.0 && tonnes > 0.0 {
            ((tonnes / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<14} |{:<width$}| {:.2}\n",
            category.label(),
            BAR_CHAR.to_string().repeat(len),
            tonnes,
            width = width
        ));
    }
    out
}

/// Full text report: category lines, chart and total.
pub fn format_text(input: &UsageInput, result: &EmissionResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Results ({})\n", input.region));
    out.push_str("=======\n\n");

    out.push_str("Carbon Emissions by Category\n");
    for (category, tonnes) in result.breakdown() {
        out.push_str(&format!("{}\n", category_line(category, tonnes)));
    }

    out.push_str("\nTonnes of CO2 per year\n");
    out.push_str(&bar_chart(result, BAR_WIDTH));

    let (largest, tonnes) = result.largest();
    if tonnes > 0.0 {
        out.push_str(&format!(
            "  Largest source: {} {} ({:.2} tonnes, full bar)\n",
            largest.emoji(),
            largest.label(),
            tonnes
        ));
    }

    out.push_str("\nTotal Carbon Footprint\n");
    out.push_str(&format!(
        "🌍 Your total carbon footprint is: {:.2} tonnes CO2 per year\n",
        result.total_tonnes
    ));

    out
}

fn category_line(category: Category, tonnes: f64) -> String {
    format!(
        "{} {}: {:.2} tonnes CO2 per year",
        category.emoji(),
        category.label(),
        tonnes
    )
}

/// Listing of every region and its factors
pub fn format_regions(table: &FactorTable) -> String {
    let mut out = String::new();
    for (region, factors) in table.iter() {
        out.push_str(&format!("{region}\n"));
        for category in Category::ALL {
            out.push_str(&format!(
                "  {:<14} {} kgCO2/{}\n",
                category.label(),
                factors.factor(category),
                category.unit()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_engine::calculate;

    fn reference() -> (UsageInput, EmissionResult) {
        let input = crate::input::collect("Pakistan", 10.0, 300.0, 5.0, 3);
        let result = calculate(&input, &FactorTable::builtin()).unwrap();
        (input, result)
    }

    #[test]
    fn test_text_lists_categories_in_order() {
        let (input, result) = reference();
        let text = format_text(&input, &result);

        let positions: Vec<usize> = [
            "🚗 Transportation: 0.51",
            "💡 Electricity: 2.95",
            "🍽️ Diet: 1.37",
            "🗑️ Waste: 0.03",
        ]
        .iter()
        .map(|needle| text.find(needle).expect("category line present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Your total carbon footprint is: 4.86 tonnes CO2 per year"));
        assert!(text.contains("Largest source: 💡 Electricity (2.95 tonnes, full bar)"));
    }

    #[test]
    fn test_zero_result_has_no_largest_source() {
        let input = crate::input::collect("Pakistan", 0.0, 0.0, 0.0, 0);
        let text = format_text(&input, &EmissionResult::zero());
        assert!(!text.contains("Largest source"));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let (_, result) = reference();
        let chart = bar_chart(&result, 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 4);

        let bars: Vec<usize> = lines
            .iter()
            .map(|l| l.chars().filter(|c| *c == BAR_CHAR).count())
            .collect();
        // Electricity is the largest category
        assert_eq!(bars[1], 10);
        assert_eq!(bars[0], 2); // 0.51 / 2.95 * 10
        assert_eq!(bars[3], 0);
        assert!(lines[2].starts_with("  Diet"));
    }

    #[test]
    fn test_bar_chart_all_zero() {
        let chart = bar_chart(&EmissionResult::zero(), 10);
        assert!(!chart.contains(BAR_CHAR));
        assert!(chart.contains("0.00"));
    }

    #[test]
    fn test_json_report() {
        let (input, result) = reference();
        let table = FactorTable::builtin();
        let report = Report {
            input: &input,
            factors: table.get("Pakistan").unwrap(),
            result,
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["result"]["total_tonnes"], 4.86);
        assert_eq!(value["input"]["meals_per_day"], 3.0);
        assert_eq!(value["factors"]["electricity"], 0.82);
    }

    #[test]
    fn test_regions_listing() {
        let text = format_regions(&FactorTable::builtin());
        assert!(text.starts_with("Pakistan\n"));
        assert!(text.contains("0.82 kgCO2/kWh"));
        assert!(text.contains("1.25 kgCO2/meal"));
    }
}
