//! Полный цикл: таблица годов → посуточный CSV.

use crate::{
    error::Result,
    formats::csv::{DailyCsv, YearTableCsv},
    traits::{ReadFormat, WriteFormat},
};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub years: usize,
    pub days: usize,
}

/// Читает вход целиком и только потом пишет: при ошибке разбора вывода нет.
pub fn convert<R: BufRead, W: Write>(r: R, w: W) -> Result<ConvertSummary> {
    let cal = YearTableCsv::read(r)?;
    DailyCsv::write(w, &cal)?;

    let summary = ConvertSummary {
        years: cal.years().len(),
        days: cal.day_count(),
    };
    tracing::info!(years = summary.years, days = summary.days, "calendar converted");
    Ok(summary)
}
