//! CSV на входе и на выходе.
//!
//! Вход — таблица «год на строку» с заголовком:
//! `year,jan,...,dec,workdays,holidays,hours_40,hours_36,hours_24`
//! (имена колонок не проверяются, заголовок просто пропускается).
//!
//! Выход — по строке на отмеченный день: `dt,is_halfday,is_additional_holiday`.

use crate::{
    error::{ProdcalError, Result},
    model::{Calendar, Year},
};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{BufRead, Write};

pub const DAILY_HEADER: [&str; 3] = ["dt", "is_halfday", "is_additional_holiday"];

#[derive(serde::Serialize)]
struct DailyRow {
    dt: String,
    is_halfday: bool,
    is_additional_holiday: bool,
}

pub struct YearTableCsv;

impl crate::traits::ReadFormat for YearTableCsv {
    fn read<R: BufRead>(r: R) -> Result<Calendar> {
        // flexible: неверное число полей должно дойти до Year::parse
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(r);
        let mut years = Vec::new();

        for rec in rdr.records() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or_default();
            let fields: Vec<&str> = rec.iter().collect();
            let year = Year::parse(&fields).map_err(|e| ProdcalError::AtLine {
                line,
                source: Box::new(e),
            })?;
            years.push(year);
        }

        tracing::debug!(years = years.len(), "read year table");
        Ok(Calendar { years })
    }
}

pub struct DailyCsv;

impl crate::traits::WriteFormat for DailyCsv {
    fn write<W: Write>(mut w: W, cal: &Calendar) -> Result<()> {
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(&mut w);

        // заголовок пишем явно, чтобы он был и у пустого календаря
        wrt.write_record(DAILY_HEADER)?;
        for day in cal.days() {
            wrt.serialize(DailyRow {
                dt: day.date().format("%Y-%m-%d").to_string(),
                is_halfday: day.is_halfday(),
                is_additional_holiday: day.is_additional_holiday(),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}
