//! 報價引擎配置

use serde::{Deserialize, Serialize};

use crate::WorkCalendar;

/// 報價引擎參數配置
///
/// 價格表為固定資料，不在配置範圍內。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// 趕工天數計算用的生產日曆
    pub calendar: WorkCalendar,

    /// 是否拒絕低於價格表最低件數的訂單
    /// - true: 直接回報驗證錯誤
    /// - false: 照常計算（單價為 0）並附上警告（預設）
    pub enforce_minimum_quantity: bool,
}

impl QuoteConfig {
    /// 創建預設配置（週一到週五、不強制最低件數）
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置生產日曆
    pub fn with_calendar(mut self, calendar: WorkCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// 建構器模式：設置是否強制最低件數
    ///
    /// ```
    /// # use quote_core::QuoteConfig;
    /// let config = QuoteConfig::new().with_enforce_minimum_quantity(true);
    /// assert!(config.enforce_minimum_quantity);
    /// ```
    pub fn with_enforce_minimum_quantity(mut self, enforce: bool) -> Self {
        self.enforce_minimum_quantity = enforce;
        self
    }
}
