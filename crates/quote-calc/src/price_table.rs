//! 分級價格表
//!
//! 件數區間 × 顏色數 → 每件印刷單價（美元）。價格為固定商業資料。

use rust_decimal::Decimal;

/// 價格級距
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    /// 最小件數（含）
    pub min_qty: u32,

    /// 最大件數（含），`None` 表示無上限
    pub max_qty: Option<u32>,

    /// 各顏色數的單價（美分），索引 = 顏色數 - 1
    price_cents: &'static [i64],
}

impl PriceTier {
    const fn new(min_qty: u32, max_qty: Option<u32>, price_cents: &'static [i64]) -> Self {
        Self {
            min_qty,
            max_qty,
            price_cents,
        }
    }

    /// 件數是否落在此級距
    pub fn contains(&self, pieces: u32) -> bool {
        pieces >= self.min_qty && self.max_qty.map_or(true, |max| pieces <= max)
    }

    /// 此級距定義的最大顏色數
    pub fn max_colors(&self) -> usize {
        self.price_cents.len()
    }

    /// 查詢單價，超過表格顏色數時沿用最後一欄
    pub fn price_for(&self, colors: u32) -> Decimal {
        let last = self.max_colors().saturating_sub(1);
        let index = (colors.saturating_sub(1) as usize).min(last);

        self.price_cents
            .get(index)
            .map(|cents| Decimal::new(*cents, 2))
            .unwrap_or(Decimal::ZERO)
    }
}

static PRICE_TIERS: [PriceTier; 7] = [
    PriceTier::new(12, Some(23), &[293, 339, 408, 523]),
    PriceTier::new(
        24,
        Some(48),
        &[201, 259, 316, 374, 431, 489, 546, 604, 661, 719, 776],
    ),
    PriceTier::new(
        49,
        Some(143),
        &[138, 173, 207, 242, 276, 311, 345, 380, 414, 449, 483, 518],
    ),
    PriceTier::new(
        144,
        Some(575),
        &[104, 121, 132, 155, 178, 201, 224, 247, 270, 299, 334, 368],
    ),
    PriceTier::new(
        576,
        Some(1727),
        &[75, 92, 109, 127, 144, 161, 178, 196, 213, 230, 247, 265],
    ),
    PriceTier::new(
        1728,
        Some(5003),
        &[63, 75, 86, 98, 109, 121, 132, 144, 155, 167, 178, 190],
    ),
    PriceTier::new(
        5004,
        None,
        &[52, 63, 69, 75, 81, 92, 104, 109, 127, 144, 161, 178],
    ),
];

/// 價格表查詢
pub struct PriceTable;

impl PriceTable {
    /// 所有價格級距（依件數遞增）
    pub fn tiers() -> &'static [PriceTier] {
        &PRICE_TIERS
    }

    /// 價格表可報價的最低件數
    pub fn minimum_quantity() -> u32 {
        PRICE_TIERS.first().map_or(0, |tier| tier.min_qty)
    }

    /// 找出件數所屬的級距
    pub fn tier_for(pieces: u32) -> Option<&'static PriceTier> {
        PRICE_TIERS.iter().find(|tier| tier.contains(pieces))
    }

    /// 查詢每件印刷單價
    ///
    /// 件數不在任何級距內（低於最低件數）時回傳 0，由呼叫端判斷是否接受。
    pub fn lookup_price(pieces: u32, colors: u32) -> Decimal {
        Self::tier_for(pieces)
            .map(|tier| tier.price_for(colors))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn usd(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[rstest]
    #[case(12, 1, 293)]
    #[case(23, 4, 523)]
    #[case(24, 1, 201)]
    #[case(40, 2, 259)]
    #[case(48, 11, 776)]
    #[case(49, 12, 518)]
    #[case(100, 3, 207)]
    #[case(143, 5, 276)]
    #[case(144, 10, 299)]
    #[case(575, 1, 104)]
    #[case(576, 8, 196)]
    #[case(1727, 12, 265)]
    #[case(1728, 3, 86)]
    #[case(5003, 6, 121)]
    #[case(5004, 1, 52)]
    #[case(1_000_000, 12, 178)]
    fn test_lookup_price(#[case] pieces: u32, #[case] colors: u32, #[case] cents: i64) {
        assert_eq!(PriceTable::lookup_price(pieces, colors), usd(cents));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(11)]
    fn test_below_minimum_returns_zero(#[case] pieces: u32) {
        assert_eq!(PriceTable::lookup_price(pieces, 1), Decimal::ZERO);
        assert!(PriceTable::tier_for(pieces).is_none());
    }

    #[test]
    fn test_color_clamp() {
        // 12-23 級距只定義到 4 色
        assert_eq!(PriceTable::lookup_price(20, 5), usd(523));
        assert_eq!(PriceTable::lookup_price(20, 12), usd(523));

        // 49-143 級距定義到 12 色，之後沿用最後一欄
        assert_eq!(PriceTable::lookup_price(143, 12), PriceTable::lookup_price(143, 40));

        // 24-48 級距定義到 11 色
        assert_eq!(PriceTable::lookup_price(30, 12), usd(776));
    }

    #[test]
    fn test_zero_colors_uses_first_column() {
        assert_eq!(PriceTable::lookup_price(40, 0), usd(201));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PriceTable::minimum_quantity(), 12);

        // 23 → 24 跨級距，表內顏色數的價格不得上升
        for colors in 1..=4 {
            assert!(PriceTable::lookup_price(24, colors) < PriceTable::lookup_price(23, colors));
        }

        // 7 色以上時 12-23 級距沿用 4 色價格，反而比 24 件便宜
        assert!(PriceTable::lookup_price(23, 7) < PriceTable::lookup_price(24, 7));
    }

    #[test]
    fn test_tiers_are_contiguous() {
        let tiers = PriceTable::tiers();
        for pair in tiers.windows(2) {
            assert_eq!(pair[0].max_qty.map(|max| max + 1), Some(pair[1].min_qty));
        }
        assert_eq!(tiers.last().and_then(|tier| tier.max_qty), None);
        assert_eq!(tiers[0].max_colors(), 4);
    }

    proptest! {
        #[test]
        fn prop_price_non_increasing_in_pieces(pieces in 12u32..10_000, extra in 1u32..5_000, colors in 1u32..=4) {
            let fewer = PriceTable::lookup_price(pieces, colors);
            let more = PriceTable::lookup_price(pieces + extra, colors);
            prop_assert!(more <= fewer);
        }

        #[test]
        fn prop_price_non_increasing_from_second_tier(pieces in 24u32..10_000, extra in 1u32..5_000, colors in 1u32..16) {
            let fewer = PriceTable::lookup_price(pieces, colors);
            let more = PriceTable::lookup_price(pieces + extra, colors);
            prop_assert!(more <= fewer);
        }

        #[test]
        fn prop_price_positive_from_minimum(pieces in 12u32.., colors in 1u32..64) {
            prop_assert!(PriceTable::lookup_price(pieces, colors) > Decimal::ZERO);
        }
    }
}
