//! 報價結果模型
//!
//! JSON 欄位名稱與前端既有的回應格式一致，金額一律輸出為數字。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 淺色衣物單一印刷位置的費用明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightLocationResult {
    /// 印刷位置編號（從 0 開始，與請求順序一致）
    pub index: usize,

    /// 印刷顏色數
    pub num_colors: u32,

    /// 每件印刷單價（查表）
    #[serde(rename = "basePriceLight", with = "rust_decimal::serde::float")]
    pub base_price_per_piece: Decimal,

    /// 網版費（每色 15）
    #[serde(rename = "lightScreenFee", with = "rust_decimal::serde::float")]
    pub screen_fee: Decimal,

    /// 加購項目費用合計
    #[serde(with = "rust_decimal::serde::float")]
    pub additional_cost: Decimal,

    /// 印刷費 + 加購費（不含網版費）
    #[serde(rename = "locationLightBaseTotal", with = "rust_decimal::serde::float")]
    pub base_total: Decimal,

    /// 含網版費的位置總計
    #[serde(rename = "totalLight", with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

/// 深色衣物單一印刷位置的費用明細（含打底與閃乾）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkLocationResult {
    /// 印刷位置編號
    pub index: usize,

    /// 原始印刷顏色數（不含打底）
    pub num_colors: u32,

    /// 含打底的顏色數
    pub colors_plus_underbase: u32,

    /// 查表單價（以含打底顏色數查詢）
    #[serde(with = "rust_decimal::serde::float")]
    pub table_base: Decimal,

    /// 閃乾加價（每件）
    #[serde(with = "rust_decimal::serde::float")]
    pub flash_add: Decimal,

    /// 每件印刷單價 = 查表單價 + 閃乾加價
    #[serde(rename = "darkBasePerPiece", with = "rust_decimal::serde::float")]
    pub base_price_per_piece: Decimal,

    /// 網版費（含打底網版）
    #[serde(rename = "darkScreenFee", with = "rust_decimal::serde::float")]
    pub screen_fee: Decimal,

    /// 加購項目費用合計
    #[serde(with = "rust_decimal::serde::float")]
    pub additional_cost: Decimal,

    /// 印刷費 + 加購費（不含網版費）
    #[serde(rename = "locationDarkBaseTotal", with = "rust_decimal::serde::float")]
    pub base_total: Decimal,

    /// 含網版費的位置總計
    #[serde(rename = "totalDark", with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

/// 趕工費計算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RushCharge {
    /// 趕工費
    pub fee: Decimal,

    /// 趕工加價比例（1 = 100%）
    pub pct: Decimal,

    /// 計入的生產工作天數
    pub production_days: u32,
}

impl RushCharge {
    /// 不收趕工費
    pub fn none() -> Self {
        Self::default()
    }

    /// 是否有收取趕工費
    pub fn is_charged(&self) -> bool {
        !self.fee.is_zero()
    }
}

/// 報價警告等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Warning,
}

/// 報價警告（不影響計算結果，但需要人工確認）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteWarning {
    pub severity: WarningSeverity,
    pub message: String,
}

impl QuoteWarning {
    pub fn warning(message: String) -> Self {
        Self {
            severity: WarningSeverity::Warning,
            message,
        }
    }
}

/// 完整報價結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// 件數
    pub num_pieces: u32,

    /// 淺色衣物各位置明細（與請求順序一致）
    pub location_breakdown_light: Vec<LightLocationResult>,

    /// 深色衣物各位置明細（與請求順序一致）
    pub location_breakdown_dark: Vec<DarkLocationResult>,

    #[serde(with = "rust_decimal::serde::float")]
    pub folding_poly_bagging_cost: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub individual_stickers_cost: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub aggregated_light_screen_fee: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub aggregated_dark_screen_fee: Decimal,

    /// 每件印刷均價（不含網版費與包裝加購）
    #[serde(with = "rust_decimal::serde::float")]
    pub base_printing_price_per_shirt_light: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub base_printing_price_per_shirt_dark: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_light_before_rush: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_dark_before_rush: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub rush_service_fee_light: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub rush_service_fee_dark: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub rush_pct_light: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub rush_pct_dark: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total_light: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total_dark: Decimal,

    /// 警告信息
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<QuoteWarning>,
}

impl QuoteResult {
    /// 淺色衣物總網版數
    pub fn light_screen_count(&self) -> u64 {
        self.location_breakdown_light
            .iter()
            .map(|loc| u64::from(loc.num_colors))
            .sum()
    }

    /// 深色衣物總網版數（每個位置多一張打底網版）
    pub fn dark_screen_count(&self) -> u64 {
        self.location_breakdown_dark
            .iter()
            .map(|loc| u64::from(loc.colors_plus_underbase))
            .sum()
    }

    /// 是否有任何警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
