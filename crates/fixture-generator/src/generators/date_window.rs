//! 日期区间采样

use chrono::{Days, Months, NaiveDate};
use fixture_shared::{FixtureError, Result};
use rand::Rng;

/// 闭区间日期窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(FixtureError::invalid_argument(
                "date_window",
                format!("起始日期 {} 晚于结束日期 {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// 过去若干年到今天：[today - years, today]
    pub fn trailing_years(today: NaiveDate, years: u32) -> Result<Self> {
        let start = today
            .checked_sub_months(Months::new(years * 12))
            .ok_or_else(|| FixtureError::DateOutOfRange {
                date: today,
                reason: format!("无法回退 {} 年", years),
            })?;
        Self::new(start, today)
    }

    /// 预计完工窗口：[today + days, today + years]
    pub fn upcoming(today: NaiveDate, min_days: u64, max_years: u32) -> Result<Self> {
        let start = today
            .checked_add_days(Days::new(min_days))
            .ok_or_else(|| FixtureError::DateOutOfRange {
                date: today,
                reason: format!("无法前进 {} 天", min_days),
            })?;
        let end = today
            .checked_add_months(Months::new(max_years * 12))
            .ok_or_else(|| FixtureError::DateOutOfRange {
                date: today,
                reason: format!("无法前进 {} 年", max_years),
            })?;
        Self::new(start, end)
    }

    /// 窗口包含的天数
    pub fn len_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// 按天均匀采样
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.random_range(0..self.len_days());
        // 偏移不超过窗口长度，结果必然落在 [start, end] 内
        self.start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.end)
    }
}
