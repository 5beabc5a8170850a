//! Доменные модели производственного календаря: год → месяц → день.
//!
//! Значения неизменяемы после разбора, конструкторы лежат в [`crate::parse`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Отмеченный в календаре день.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    pub(crate) date: NaiveDate,
    pub(crate) is_additional_holiday: bool,
    pub(crate) is_halfday: bool,
}

impl Day {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Дополнительный выходной (маркер `+`).
    pub fn is_additional_holiday(&self) -> bool {
        self.is_additional_holiday
    }

    /// Сокращённый день (маркер `*`).
    pub fn is_halfday(&self) -> bool {
        self.is_halfday
    }
}

/// Компактная запись дня, как в исходной таблице: `24+`, `3*`, `10`.
impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.day())?;
        if self.is_halfday {
            f.write_str("*")?;
        }
        if self.is_additional_holiday {
            f.write_str("+")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Month {
    /// Всегда первое число месяца.
    pub(crate) date: NaiveDate,
    /// В порядке исходной записи, без сортировки.
    pub(crate) days: Vec<Day>,
}

impl Month {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }
}

impl<'a> IntoIterator for &'a Month {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Year {
    /// Всегда 1 января.
    pub(crate) date: NaiveDate,
    pub(crate) workdays: u32,
    pub(crate) holidays: u32,
    pub(crate) work_hours_40: f64,
    pub(crate) work_hours_36: f64,
    pub(crate) work_hours_24: f64,
    /// Ровно 12 месяцев, январь первым.
    pub(crate) months: Vec<Month>,
}

impl Year {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn workdays(&self) -> u32 {
        self.workdays
    }

    pub fn holidays(&self) -> u32 {
        self.holidays
    }

    /// Норма часов при 40-часовой неделе.
    pub fn work_hours_40(&self) -> f64 {
        self.work_hours_40
    }

    pub fn work_hours_36(&self) -> f64 {
        self.work_hours_36
    }

    pub fn work_hours_24(&self) -> f64 {
        self.work_hours_24
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Месяц по номеру 1..=12.
    pub fn month(&self, n: u32) -> Option<&Month> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        self.months.get(idx)
    }
}

impl<'a> IntoIterator for &'a Year {
    type Item = &'a Month;
    type IntoIter = std::slice::Iter<'a, Month>;

    fn into_iter(self) -> Self::IntoIter {
        self.months.iter()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Calendar {
    pub(crate) years: Vec<Year>,
}

impl Calendar {
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Все дни подряд: год → месяц → день, в исходном порядке.
    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.years
            .iter()
            .flat_map(|y| y.months.iter())
            .flat_map(|m| m.days.iter())
    }

    pub fn day_count(&self) -> usize {
        self.years
            .iter()
            .flat_map(|y| y.months.iter())
            .map(|m| m.days.len())
            .sum()
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a Year;
    type IntoIter = std::slice::Iter<'a, Year>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.iter()
    }
}
