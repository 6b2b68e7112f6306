//! # Quote Core
//!
//! 網版印刷報價的核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod location;
pub mod request;
pub mod result;

// Re-export 主要類型
pub use calendar::WorkCalendar;
pub use config::QuoteConfig;
pub use location::{LocationOptions, MAX_COLORS};
pub use request::QuoteRequest;
pub use result::{
    DarkLocationResult, LightLocationResult, QuoteResult, QuoteWarning, RushCharge,
    WarningSeverity,
};

/// 報價錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("請求驗證失敗: {0}")]
    Validation(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("計算錯誤: {0}")]
    Calculation(String),
}

impl QuoteError {
    /// 是否為請求端錯誤（應回報 400 而非 500）
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuoteError::Validation(_) | QuoteError::InvalidDate(_))
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
