//! 單一印刷位置的淺色 / 深色費用計算

use quote_core::{DarkLocationResult, LightLocationResult, LocationOptions};
use rust_decimal::Decimal;

use crate::price_table::PriceTable;

/// 每張網版的製版費
pub const SCREEN_FEE_PER_COLOR: i64 = 15;

/// 位置費用計算器
pub struct LocationCalculator;

impl LocationCalculator {
    /// 每張網版費用
    pub fn screen_fee_per_color() -> Decimal {
        Decimal::from(SCREEN_FEE_PER_COLOR)
    }

    /// 深色衣物閃乾加價（每件 0.15）
    pub fn flash_cure_per_piece() -> Decimal {
        Decimal::new(15, 2)
    }

    /// 淺色衣物費用
    pub fn light(index: usize, opts: &LocationOptions, pieces: u32) -> LightLocationResult {
        let base_price_per_piece = PriceTable::lookup_price(pieces, opts.num_colors);
        let screen_fee = Self::screen_fee(opts.num_colors);
        let additional_cost = Self::additional_cost(opts, pieces);

        let base_total = base_price_per_piece * Decimal::from(pieces) + additional_cost;
        let grand_total = base_total + screen_fee;

        LightLocationResult {
            index,
            num_colors: opts.num_colors,
            base_price_per_piece,
            screen_fee,
            additional_cost,
            base_total,
            grand_total,
        }
    }

    /// 深色衣物費用（多一層打底，單價加閃乾）
    pub fn dark(index: usize, opts: &LocationOptions, pieces: u32) -> DarkLocationResult {
        let colors_plus_underbase = opts.colors_plus_underbase();
        let table_base = PriceTable::lookup_price(pieces, colors_plus_underbase);
        let flash_add = Self::flash_cure_per_piece();
        let base_price_per_piece = table_base + flash_add;
        let screen_fee = Self::screen_fee(colors_plus_underbase);

        // 特殊油墨只按原始顏色數計費，打底不算
        let additional_cost = Self::additional_cost(opts, pieces);

        let base_total = base_price_per_piece * Decimal::from(pieces) + additional_cost;
        let grand_total = base_total + screen_fee;

        DarkLocationResult {
            index,
            num_colors: opts.num_colors,
            colors_plus_underbase,
            table_base,
            flash_add,
            base_price_per_piece,
            screen_fee,
            additional_cost,
            base_total,
            grand_total,
        }
    }

    fn screen_fee(screens: u32) -> Decimal {
        Self::screen_fee_per_color() * Decimal::from(screens)
    }

    /// 加購項目費用合計
    ///
    /// CMYK 製版為一次性費用，其餘按件數計費。
    pub fn additional_cost(opts: &LocationOptions, pieces: u32) -> Decimal {
        let pieces = Decimal::from(pieces);
        let mut cost = Decimal::ZERO;

        if opts.cmyk_setup {
            cost += Decimal::from(150);
        }
        if opts.special_location {
            cost += Decimal::new(35, 2) * pieces;
        }
        if opts.bulk_special {
            cost += Decimal::new(75, 2) * pieces;
        }
        if opts.synthetic_fabric {
            cost += Decimal::new(35, 2) * pieces;
        }
        if opts.specialty_inks {
            cost += Decimal::new(35, 2) * Decimal::from(opts.num_colors) * pieces;
        }
        if opts.reflective_glow_water {
            cost += pieces;
        }

        cost
    }
}
