//! # Quote Calculation Engine
//!
//! 網版印刷報價計算引擎：價格表查詢、位置費用、趕工費與報價彙總

pub mod calculator;
pub mod location;
pub mod price_table;
pub mod rush;

// Re-export 主要類型
pub use calculator::QuoteCalculator;
pub use location::LocationCalculator;
pub use price_table::{PriceTable, PriceTier};
pub use rush::RushCalculator;
