//! # Screen-Print Quote
//!
//! 網版印刷報價引擎：分級單價、印刷位置加購、深色打底與趕工費
//!
//! ```
//! use screenprint_quote::{LocationOptions, QuoteCalculator, QuoteRequest};
//! use rust_decimal::Decimal;
//!
//! let request = QuoteRequest::new(40).with_location(LocationOptions::new(2));
//! let result = QuoteCalculator::default().calculate(&request).unwrap();
//!
//! assert_eq!(result.grand_total_light, Decimal::new(13360, 2));
//! ```

pub use quote_api::{render_preview, rush_label, ApiError, ApiResponse, QuoteService};
pub use quote_calc::{LocationCalculator, PriceTable, PriceTier, QuoteCalculator, RushCalculator};
pub use quote_core::{
    DarkLocationResult, LightLocationResult, LocationOptions, QuoteConfig, QuoteError,
    QuoteRequest, QuoteResult, QuoteWarning, RushCharge, WarningSeverity, WorkCalendar,
};
