//! 趕工費計算
//!
//! 依空白衣物到貨日到出貨日之間（含頭尾）的生產工作天數決定加價比例：
//! 1 天 100%、2 天 75%、3 天 50%、4 天 25%，其他天數不加價。

use chrono::{DateTime, NaiveDate};
use quote_core::{QuoteError, RushCharge, WorkCalendar};
use rust_decimal::Decimal;

/// 解析 ISO 日期（`YYYY-MM-DD`），也接受 RFC 3339 時間戳並取其日期部分
pub fn parse_date(value: &str) -> quote_core::Result<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|e| QuoteError::InvalidDate(format!("{}: {}", value, e)))
}

/// 趕工費計算器
pub struct RushCalculator;

impl RushCalculator {
    /// 生產天數對應的加價比例
    pub fn pct_for_days(production_days: u32) -> Decimal {
        match production_days {
            1 => Decimal::ONE,
            2 => Decimal::new(75, 2),
            3 => Decimal::new(50, 2),
            4 => Decimal::new(25, 2),
            _ => Decimal::ZERO,
        }
    }

    /// 以已解析的日期計算趕工費
    pub fn calculate(
        arrival: NaiveDate,
        shipping: NaiveDate,
        subtotal: Decimal,
        calendar: &WorkCalendar,
    ) -> RushCharge {
        if subtotal.is_zero() || arrival > shipping {
            return RushCharge::none();
        }

        let production_days = calendar.working_days_inclusive(arrival, shipping);
        let pct = Self::pct_for_days(production_days);

        tracing::debug!(
            "趕工計算: {} → {}，生產 {} 天，加價 {}",
            arrival,
            shipping,
            production_days,
            pct
        );

        RushCharge {
            fee: subtotal * pct,
            pct,
            production_days,
        }
    }

    /// 以請求中的原始日期字串計算趕工費
    ///
    /// 任一輸入缺少或日期無法解析時不收趕工費，不回報錯誤。
    pub fn from_request_dates(
        blank_arrival_date: Option<&str>,
        shipping_date: Option<&str>,
        subtotal: Option<Decimal>,
        calendar: &WorkCalendar,
    ) -> RushCharge {
        let (Some(arrival), Some(shipping), Some(subtotal)) =
            (blank_arrival_date, shipping_date, subtotal)
        else {
            return RushCharge::none();
        };

        match (parse_date(arrival), parse_date(shipping)) {
            (Ok(arrival), Ok(shipping)) => Self::calculate(arrival, shipping, subtotal, calendar),
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!("略過趕工費: {}", e);
                RushCharge::none()
            }
        }
    }
}
