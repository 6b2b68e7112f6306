//! # Quote API
//!
//! 報價引擎的 JSON 邊界層：解析請求、呼叫計算器、包裝成 `{ ok, data | error }` 回應

pub mod logging;
pub mod preview;

use quote_calc::QuoteCalculator;
use quote_core::{QuoteConfig, QuoteError, QuoteRequest, QuoteResult};
use serde::Serialize;

pub use preview::{render_preview, rush_label};

/// 邊界層錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl ApiError {
    /// 對應的 HTTP 狀態碼
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Json(_) => 400,
            ApiError::Quote(e) if e.is_client_error() => 400,
            ApiError::Quote(_) => 500,
        }
    }
}

/// 回應封包
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<QuoteResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip)]
    pub status: u16,
}

impl ApiResponse {
    pub fn success(data: QuoteResult) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            status: 200,
        }
    }

    pub fn failure(error: &ApiError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.to_string()),
            status: error.status(),
        }
    }

    /// 序列化為 JSON 字串
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// 報價服務（無狀態，可在多個呼叫端之間共用）
#[derive(Debug, Clone, Default)]
pub struct QuoteService {
    calculator: QuoteCalculator,
}

impl QuoteService {
    /// 創建新的報價服務
    pub fn new(config: QuoteConfig) -> Self {
        Self {
            calculator: QuoteCalculator::new(config),
        }
    }

    /// 解析 JSON 請求並計算報價
    pub fn quote(&self, body: &str) -> Result<QuoteResult, ApiError> {
        let request: QuoteRequest = serde_json::from_str(body)?;
        Ok(self.calculator.calculate(&request)?)
    }

    /// 處理一筆請求，錯誤一律轉為失敗封包
    pub fn handle(&self, body: &str) -> ApiResponse {
        match self.quote(body) {
            Ok(result) => ApiResponse::success(result),
            Err(e) => {
                tracing::warn!("報價請求失敗 ({}): {}", e.status(), e);
                ApiResponse::failure(&e)
            }
        }
    }
}
