//! 客戶報價文字預覽
//!
//! 由報價結果產生可直接貼給客戶的淺色 / 深色報價摘要。

use quote_calc::LocationCalculator;
use quote_core::QuoteResult;
use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// 趕工比例對應的顯示標籤
pub fn rush_label(pct: Decimal) -> Option<&'static str> {
    if pct.is_zero() {
        return None;
    }

    let within = |low: i64, high: i64| pct >= Decimal::new(low, 2) && pct <= Decimal::new(high, 2);

    if pct >= Decimal::new(999, 3) {
        Some("1-day rush")
    } else if within(74, 76) {
        Some("2-day rush")
    } else if within(49, 51) {
        Some("3-day rush")
    } else if within(24, 26) {
        Some("4-day rush")
    } else {
        None
    }
}

/// 美元金額格式（千分位、兩位小數）
pub fn format_usd(amount: Decimal) -> String {
    Money::from_decimal(amount.round_dp(2), iso::USD).to_string()
}

fn rush_line(fee: Decimal, pct: Decimal, grand_total: Decimal) -> Option<String> {
    if fee.is_zero() {
        return None;
    }
    rush_label(pct).map(|label| format!("Total ({}): {}", label, format_usd(grand_total)))
}

fn light_lines(result: &QuoteResult) -> Vec<String> {
    let mut lines = vec![format!("{} light shirts", result.num_pieces)];

    for (i, loc) in result.location_breakdown_light.iter().enumerate() {
        lines.push(format!(
            "{} colors Location {}: {} ea",
            loc.num_colors,
            i + 1,
            format_usd(loc.base_price_per_piece)
        ));
    }

    lines.push(format!(
        "{} screens at {} ea",
        result.light_screen_count(),
        format_usd(LocationCalculator::screen_fee_per_color())
    ));
    lines.push(format!(
        "Total (no rush): {}",
        format_usd(result.total_light_before_rush)
    ));
    lines.extend(rush_line(
        result.rush_service_fee_light,
        result.rush_pct_light,
        result.grand_total_light,
    ));

    lines
}

fn dark_lines(result: &QuoteResult) -> Vec<String> {
    let mut lines = vec![format!("{} dark shirts", result.num_pieces)];

    for (i, loc) in result.location_breakdown_dark.iter().enumerate() {
        lines.push(format!(
            "{} colors Location {}: $({:.2}+{:.2} flash)",
            loc.colors_plus_underbase,
            i + 1,
            loc.table_base,
            loc.flash_add
        ));
    }

    let base_colors: u64 = result
        .location_breakdown_dark
        .iter()
        .map(|loc| u64::from(loc.num_colors))
        .sum();
    lines.push(format!(
        "{} screens ({} colors + {} underbase) at {} ea",
        result.dark_screen_count(),
        base_colors,
        result.location_breakdown_dark.len(),
        format_usd(LocationCalculator::screen_fee_per_color())
    ));
    lines.push(format!(
        "Total (no rush): {}",
        format_usd(result.total_dark_before_rush)
    ));
    lines.extend(rush_line(
        result.rush_service_fee_dark,
        result.rush_pct_dark,
        result.grand_total_dark,
    ));

    lines
}

/// 產生客戶報價文字
pub fn render_preview(result: &QuoteResult) -> String {
    let mut lines = vec!["— LIGHT —".to_string()];
    lines.extend(light_lines(result));
    lines.push(String::new());
    lines.push("— DARK —".to_string());
    lines.extend(dark_lines(result));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quote_calc::QuoteCalculator;
    use quote_core::{LocationOptions, QuoteRequest};
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::ZERO, None)]
    #[case(Decimal::ONE, Some("1-day rush"))]
    #[case(Decimal::new(9995, 4), Some("1-day rush"))]
    #[case(Decimal::new(75, 2), Some("2-day rush"))]
    #[case(Decimal::new(5, 1), Some("3-day rush"))]
    #[case(Decimal::new(25, 2), Some("4-day rush"))]
    #[case(Decimal::new(6, 1), None)]
    #[case(Decimal::new(1, 1), None)]
    fn test_rush_label(#[case] pct: Decimal, #[case] expected: Option<&str>) {
        assert_eq!(rush_label(pct), expected);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::new(13360, 2)), "$133.60");
        assert_eq!(format_usd(Decimal::from(15)), "$15.00");
        assert_eq!(format_usd(Decimal::new(123456789, 2)), "$1,234,567.89");
    }

    #[test]
    fn test_preview_without_rush() {
        let request = QuoteRequest::new(40).with_location(LocationOptions::new(2));
        let result = QuoteCalculator::default().calculate(&request).unwrap();

        let expected = [
            "— LIGHT —",
            "40 light shirts",
            "2 colors Location 1: $2.59 ea",
            "2 screens at $15.00 ea",
            "Total (no rush): $133.60",
            "",
            "— DARK —",
            "40 dark shirts",
            "3 colors Location 1: $(3.16+0.15 flash)",
            "3 screens (2 colors + 1 underbase) at $15.00 ea",
            "Total (no rush): $177.40",
        ]
        .join("\n");

        assert_eq!(render_preview(&result), expected);
    }

    #[test]
    fn test_preview_with_rush() {
        // 週一到週二 = 2 個工作天 → 75%
        let request = QuoteRequest::new(40)
            .with_location(LocationOptions::new(2))
            .with_location(LocationOptions::new(1))
            .with_rush_window(
                NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
                NaiveDate::from_ymd_opt(2025, 10, 7).unwrap(),
            );
        let result = QuoteCalculator::default().calculate(&request).unwrap();
        let preview = render_preview(&result);

        assert!(preview.contains("1 colors Location 2: $2.01 ea"));
        assert!(preview.contains("3 screens at $15.00 ea"));
        assert!(preview.contains("5 screens (3 colors + 2 underbase) at $15.00 ea"));
        assert_eq!(preview.matches("Total (2-day rush): ").count(), 2);
    }

    #[test]
    fn test_preview_at_color_ceiling() {
        let request = QuoteRequest::new(40)
            .with_location(LocationOptions::new(quote_core::MAX_COLORS))
            .with_location(LocationOptions::new(2));
        let result = QuoteCalculator::default().calculate(&request).unwrap();
        let preview = render_preview(&result);

        assert!(preview.contains("202 screens at $15.00 ea"));
        assert!(preview.contains("204 screens (202 colors + 2 underbase) at $15.00 ea"));
    }
}
