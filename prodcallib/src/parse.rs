//! Разбор строк таблицы производственного календаря.
//!
//! Строка года: `год, 12 × "список дней", рабочих дней, выходных, часы 40/36/24`.
//! Список дней — токены через запятую, `*` помечает сокращённый день,
//! `+` — дополнительный выходной.

use crate::{
    error::{ProdcalError, Result},
    model::{Calendar, Day, Month, Year},
};
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// Полей в строке года: год, 12 месяцев, 5 итоговых чисел.
pub const YEAR_ROW_FIELDS: usize = 18;
pub const MONTHS_PER_YEAR: usize = 12;

const HALFDAY_MARK: char = '*';
const ADDITIONAL_HOLIDAY_MARK: char = '+';

impl Day {
    /// Разбирает токен дня (`23`, `24+`, `30*`) в пределах месяца `month`.
    pub fn parse(month: NaiveDate, token: &str) -> Result<Day> {
        let invalid = || ProdcalError::InvalidDayToken {
            token: token.to_string(),
            month: month.with_day(1).unwrap_or(month),
        };

        let is_halfday = token.contains(HALFDAY_MARK);
        let is_additional_holiday = token.contains(ADDITIONAL_HOLIDAY_MARK);

        let digits: String = token
            .chars()
            .filter(|&c| c != HALFDAY_MARK && c != ADDITIONAL_HOLIDAY_MARK)
            .collect();
        let day: u32 = digits.trim().parse().map_err(|_| invalid())?;
        let date = month.with_day(day).ok_or_else(invalid)?;

        Ok(Day {
            date,
            is_additional_holiday,
            is_halfday,
        })
    }
}

impl Month {
    /// Месяц `month_n` (1..=12) года `year` из списка дней через запятую.
    ///
    /// Пустая строка не означает «нет дней»: это один пустой токен и ошибка.
    pub fn parse(year: NaiveDate, month_n: u32, data: &str) -> Result<Month> {
        let date = year
            .with_day(1)
            .and_then(|d| d.with_month(month_n))
            .ok_or(ProdcalError::InvalidMonth { month: month_n })?;

        let days = data
            .split(',')
            .map(|token| Day::parse(date, token))
            .collect::<Result<Vec<_>>>()?;

        Ok(Month { date, days })
    }
}

impl Year {
    pub fn parse<S: AsRef<str>>(fields: &[S]) -> Result<Year> {
        if fields.len() != YEAR_ROW_FIELDS {
            return Err(ProdcalError::MalformedRow {
                expected: YEAR_ROW_FIELDS,
                found: fields.len(),
            });
        }

        let raw_year = fields[0].as_ref();
        let year: i32 = number("year", raw_year)?;
        let date = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| ProdcalError::InvalidNumber {
            field: "year",
            value: raw_year.to_string(),
        })?;

        let months = fields[1..=MONTHS_PER_YEAR]
            .iter()
            .zip(1u32..)
            .map(|(data, n)| Month::parse(date, n, data.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let totals = &fields[MONTHS_PER_YEAR + 1..];
        let parsed = Year {
            date,
            workdays: number("workdays", totals[0].as_ref())?,
            holidays: number("holidays", totals[1].as_ref())?,
            work_hours_40: number("work_hours_40", totals[2].as_ref())?,
            work_hours_36: number("work_hours_36", totals[3].as_ref())?,
            work_hours_24: number("work_hours_24", totals[4].as_ref())?,
            months,
        };

        tracing::debug!(
            year,
            days = parsed.months.iter().map(|m| m.days.len()).sum::<usize>(),
            workdays = parsed.workdays,
            "parsed year row"
        );
        Ok(parsed)
    }
}

impl Calendar {
    /// Годы в порядке строк; повторяющиеся годы сохраняются как есть.
    pub fn parse<I, R, S>(rows: I) -> Result<Calendar>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let years = rows
            .into_iter()
            .map(|row| Year::parse(row.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Calendar { years })
    }
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ProdcalError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
