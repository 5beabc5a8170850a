//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Calendar};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Calendar>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, cal: &Calendar) -> Result<()>;
}
