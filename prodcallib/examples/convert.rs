use prodcallib::convert::convert;
use std::io::{self, BufReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: таблица годов из stdin -> посуточный CSV в stdout
    let summary = convert(BufReader::new(io::stdin()), io::stdout())?;
    eprintln!("{} years, {} days", summary.years, summary.days);
    Ok(())
}
