//! 報價主計算器

use quote_core::{
    DarkLocationResult, LightLocationResult, QuoteConfig, QuoteError, QuoteRequest, QuoteResult,
    QuoteWarning, RushCharge,
};
use rust_decimal::Decimal;

use crate::location::LocationCalculator;
use crate::price_table::PriceTable;
use crate::rush::RushCalculator;

/// 單一衣物色系（淺色或深色）的彙總
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct VariantTotals {
    base_total: Decimal,
    screen_fee: Decimal,
}

impl VariantTotals {
    fn add(&mut self, base_total: Decimal, screen_fee: Decimal) {
        self.base_total += base_total;
        self.screen_fee += screen_fee;
    }
}

/// 報價計算器
#[derive(Debug, Clone, Default)]
pub struct QuoteCalculator {
    /// 報價配置
    config: QuoteConfig,
}

impl QuoteCalculator {
    /// 創建新的報價計算器
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    /// 主報價計算入口
    pub fn calculate(&self, request: &QuoteRequest) -> quote_core::Result<QuoteResult> {
        request.validate()?;

        let pieces = request.num_pieces;
        tracing::info!(
            "開始報價計算：{} 件，{} 個印刷位置",
            pieces,
            request.locations.len()
        );

        let mut warnings = Vec::new();
        let minimum = PriceTable::minimum_quantity();
        if pieces < minimum {
            if self.config.enforce_minimum_quantity {
                return Err(QuoteError::Validation(format!(
                    "numPieces {} 低於最低件數 {}",
                    pieces, minimum
                )));
            }

            tracing::warn!("件數 {} 低於價格表最低件數 {}，印刷單價以 0 計", pieces, minimum);
            warnings.push(QuoteWarning::warning(format!(
                "件數 {} 低於最低件數 {}，印刷單價無法查表",
                pieces, minimum
            )));
        }

        // Step 1: 逐位置計算淺色 / 深色費用
        let mut light = VariantTotals::default();
        let mut dark = VariantTotals::default();
        let mut location_breakdown_light: Vec<LightLocationResult> =
            Vec::with_capacity(request.locations.len());
        let mut location_breakdown_dark: Vec<DarkLocationResult> =
            Vec::with_capacity(request.locations.len());

        for (index, opts) in request.locations.iter().enumerate() {
            let light_result = LocationCalculator::light(index, opts, pieces);
            let dark_result = LocationCalculator::dark(index, opts, pieces);

            tracing::debug!(
                "位置 {}: {} 色（加購: {}），淺色 {}，深色 {}",
                index + 1,
                opts.num_colors,
                opts.has_add_ons(),
                light_result.grand_total,
                dark_result.grand_total
            );

            light.add(light_result.base_total, light_result.screen_fee);
            dark.add(dark_result.base_total, dark_result.screen_fee);
            location_breakdown_light.push(light_result);
            location_breakdown_dark.push(dark_result);
        }

        // Step 2: 包裝類加購（每件一次，與位置數無關）
        let piece_count = Decimal::from(pieces);
        let folding_poly_bagging_cost = if request.folding_poly_bagging {
            Decimal::new(45, 2) * piece_count
        } else {
            Decimal::ZERO
        };
        let individual_stickers_cost = if request.individual_stickers {
            Decimal::new(10, 2) * piece_count
        } else {
            Decimal::ZERO
        };
        let packaging = folding_poly_bagging_cost + individual_stickers_cost;

        let total_light_before_rush = light.base_total + light.screen_fee + packaging;
        let total_dark_before_rush = dark.base_total + dark.screen_fee + packaging;

        // Step 3: 趕工費（淺色 / 深色小計不同，分別計算）
        let rush_light = self.rush_for(request, total_light_before_rush);
        let rush_dark = self.rush_for(request, total_dark_before_rush);

        if rush_light.is_charged() || rush_dark.is_charged() {
            tracing::info!(
                "趕工：生產 {} 個工作天，淺色 {}%，深色 {}%",
                rush_light.production_days.max(rush_dark.production_days),
                rush_light.pct * Decimal::ONE_HUNDRED,
                rush_dark.pct * Decimal::ONE_HUNDRED
            );
        }

        let result = QuoteResult {
            num_pieces: pieces,
            location_breakdown_light,
            location_breakdown_dark,
            folding_poly_bagging_cost,
            individual_stickers_cost,
            aggregated_light_screen_fee: light.screen_fee,
            aggregated_dark_screen_fee: dark.screen_fee,
            base_printing_price_per_shirt_light: Self::per_shirt(light.base_total, pieces)?,
            base_printing_price_per_shirt_dark: Self::per_shirt(dark.base_total, pieces)?,
            total_light_before_rush,
            total_dark_before_rush,
            rush_service_fee_light: rush_light.fee,
            rush_service_fee_dark: rush_dark.fee,
            rush_pct_light: rush_light.pct,
            rush_pct_dark: rush_dark.pct,
            grand_total_light: total_light_before_rush + rush_light.fee,
            grand_total_dark: total_dark_before_rush + rush_dark.fee,
            warnings,
        };

        tracing::info!(
            "報價完成：淺色 {}，深色 {}",
            result.grand_total_light,
            result.grand_total_dark
        );

        Ok(result)
    }

    fn rush_for(&self, request: &QuoteRequest, subtotal: Decimal) -> RushCharge {
        RushCalculator::from_request_dates(
            request.blank_arrival_date.as_deref(),
            request.shipping_date.as_deref(),
            Some(subtotal),
            &self.config.calendar,
        )
    }

    /// 每件印刷均價（不含網版費與包裝加購）
    fn per_shirt(base_total: Decimal, pieces: u32) -> quote_core::Result<Decimal> {
        base_total
            .checked_div(Decimal::from(pieces))
            .ok_or_else(|| QuoteError::Calculation("件數為 0，無法計算每件均價".to_string()))
    }

    /// 獲取報價配置引用
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }
}
