//! 生產工作日曆（趕工天數計算用）

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 生產工作日曆
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// 工作日（週一到週日，true表示工作日）
    /// 索引 0 = 週一, 1 = 週二, ..., 6 = 週日
    pub working_days: [bool; 7],

    /// 休假日列表（不計入生產天數）
    pub holidays: Vec<NaiveDate>,

    /// 日曆ID
    pub calendar_id: String,
}

impl WorkCalendar {
    /// 創建新的工作日曆（預設週一到週五為工作日）
    pub fn new(calendar_id: String) -> Self {
        Self {
            working_days: [true, true, true, true, true, false, false],
            calendar_id,
            holidays: Vec::new(),
        }
    }

    /// 建構器模式：設置工作日
    pub fn with_working_days(mut self, working_days: [bool; 7]) -> Self {
        self.working_days = working_days;
        self
    }

    /// 建構器模式：設置休假日
    pub fn with_holidays(mut self, mut holidays: Vec<NaiveDate>) -> Self {
        holidays.sort();
        holidays.dedup();
        self.holidays = holidays;
        self
    }

    /// 添加休假日
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if let Err(pos) = self.holidays.binary_search(&date) {
            self.holidays.insert(pos, date);
        }
    }

    /// 檢查是否為工作日
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.holidays.contains(&date) {
            return false;
        }

        let weekday_index = date.weekday().num_days_from_monday() as usize;
        self.working_days[weekday_index]
    }

    /// 計算 `start` 到 `end`（含頭尾）之間的工作日數量
    ///
    /// `start > end` 時回傳 0。
    pub fn working_days_inclusive(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| self.is_working_day(*day))
            .fold(0, |count, _| count + 1)
    }

    /// 從排班表資料創建工作日曆
    ///
    /// 超過 7 筆的工作日設定會被忽略，不足的視為休息日。
    ///
    /// ```
    /// use quote_core::WorkCalendar;
    /// use chrono::NaiveDate;
    ///
    /// // 週一到週六都有排產
    /// let calendar = WorkCalendar::from_shift_data(
    ///     "SHOP-A".to_string(),
    ///     vec![true, true, true, true, true, true, false],
    ///     vec![],
    /// );
    /// let saturday = NaiveDate::from_ymd_opt(2025, 10, 11).unwrap();
    /// assert!(calendar.is_working_day(saturday));
    /// ```
    pub fn from_shift_data(
        calendar_id: String,
        working_days_vec: Vec<bool>,
        holidays: Vec<NaiveDate>,
    ) -> Self {
        let mut working_days = [false; 7];
        for (slot, is_working) in working_days.iter_mut().zip(working_days_vec) {
            *slot = is_working;
        }

        Self {
            working_days,
            holidays: Vec::new(),
            calendar_id,
        }
        .with_holidays(holidays)
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new("DEFAULT".to_string())
    }
}
