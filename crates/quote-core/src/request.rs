//! 報價請求模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{LocationOptions, QuoteError, MAX_COLORS};

/// 報價請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// 件數
    pub num_pieces: u32,

    /// 印刷位置（順序即顯示編號）
    pub locations: Vec<LocationOptions>,

    /// 折疊 + 單件包袋
    #[serde(default)]
    pub folding_poly_bagging: bool,

    /// 單件貼標
    #[serde(default)]
    pub individual_stickers: bool,

    /// 空白衣物到貨日（ISO 日期字串，解析失敗視為未提供）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank_arrival_date: Option<String>,

    /// 出貨日（ISO 日期字串，解析失敗視為未提供）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_date: Option<String>,
}

impl QuoteRequest {
    /// 創建新的報價請求（尚無印刷位置）
    pub fn new(num_pieces: u32) -> Self {
        Self {
            num_pieces,
            locations: Vec::new(),
            folding_poly_bagging: false,
            individual_stickers: false,
            blank_arrival_date: None,
            shipping_date: None,
        }
    }

    /// 建構器模式：添加印刷位置
    pub fn with_location(mut self, location: LocationOptions) -> Self {
        self.locations.push(location);
        self
    }

    /// 建構器模式：折疊包袋
    pub fn with_folding_poly_bagging(mut self, enabled: bool) -> Self {
        self.folding_poly_bagging = enabled;
        self
    }

    /// 建構器模式：單件貼標
    pub fn with_individual_stickers(mut self, enabled: bool) -> Self {
        self.individual_stickers = enabled;
        self
    }

    /// 建構器模式：設置趕工區間（到貨日與出貨日）
    pub fn with_rush_window(mut self, blank_arrival: NaiveDate, shipping: NaiveDate) -> Self {
        self.blank_arrival_date = Some(blank_arrival.format("%Y-%m-%d").to_string());
        self.shipping_date = Some(shipping.format("%Y-%m-%d").to_string());
        self
    }

    /// 檢查請求是否可以計價
    ///
    /// 空的印刷位置列表是合法的（只計算包裝類加購）。
    pub fn validate(&self) -> crate::Result<()> {
        if self.num_pieces == 0 {
            return Err(QuoteError::Validation(
                "numPieces 必須至少為 1".to_string(),
            ));
        }

        if let Some(index) = self.locations.iter().position(|loc| loc.num_colors == 0) {
            return Err(QuoteError::Validation(format!(
                "locations[{}].numColors 必須至少為 1",
                index
            )));
        }

        if let Some(index) = self
            .locations
            .iter()
            .position(|loc| loc.num_colors > MAX_COLORS)
        {
            return Err(QuoteError::Validation(format!(
                "locations[{}].numColors 不可超過 {}",
                index, MAX_COLORS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = QuoteRequest::new(40)
            .with_location(LocationOptions::new(2))
            .with_location(LocationOptions::new(1).with_special_location(true))
            .with_folding_poly_bagging(true)
            .with_rush_window(
                NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
                NaiveDate::from_ymd_opt(2025, 10, 8).unwrap(),
            );

        assert_eq!(request.locations.len(), 2);
        assert!(request.folding_poly_bagging);
        assert!(!request.individual_stickers);
        assert_eq!(request.blank_arrival_date.as_deref(), Some("2025-10-06"));
        assert_eq!(request.shipping_date.as_deref(), Some("2025-10-08"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "numPieces": 100,
            "locations": [{"numColors": 3, "cmykSetup": true}],
            "individualStickers": true,
            "shippingDate": "2025-10-10"
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.num_pieces, 100);
        assert_eq!(request.locations, vec![LocationOptions::new(3).with_cmyk_setup(true)]);
        assert!(request.individual_stickers);
        assert!(!request.folding_poly_bagging);
        assert_eq!(request.blank_arrival_date, None);
        assert_eq!(request.shipping_date.as_deref(), Some("2025-10-10"));
    }

    #[test]
    fn test_deserialize_missing_locations() {
        let err = serde_json::from_str::<QuoteRequest>(r#"{"numPieces": 10}"#).unwrap_err();
        assert!(err.to_string().contains("locations"));
    }

    #[test]
    fn test_validate_zero_pieces() {
        let request = QuoteRequest::new(0).with_location(LocationOptions::new(1));
        assert!(matches!(request.validate(), Err(QuoteError::Validation(_))));
    }

    #[test]
    fn test_validate_zero_colors() {
        let request = QuoteRequest::new(24)
            .with_location(LocationOptions::new(1))
            .with_location(LocationOptions::new(0));

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("locations[1]"));
    }

    #[test]
    fn test_validate_color_ceiling() {
        let request = QuoteRequest::new(40)
            .with_location(LocationOptions::new(2))
            .with_location(LocationOptions::new(MAX_COLORS + 1));

        let err = request.validate().unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
        assert!(err.to_string().contains("locations[1]"));

        let huge = QuoteRequest::new(40).with_location(LocationOptions::new(u32::MAX));
        assert!(huge.validate().is_err());

        let at_ceiling = QuoteRequest::new(40).with_location(LocationOptions::new(MAX_COLORS));
        assert!(at_ceiling.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_locations() {
        assert!(QuoteRequest::new(24).validate().is_ok());
    }
}
