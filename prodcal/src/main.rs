use anyhow::{Context, Result};
use clap::Parser;
use prodcallib::{
    formats::csv::{DailyCsv, YearTableCsv},
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prodcal", version, about = "Производственный календарь: таблица годов → посуточный CSV")]
struct Cli {
    /// Входной CSV (строка на год, первая строка — заголовок)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Логи только в stderr: в stdout может идти CSV.
/// `RUST_LOG` перекрывает уровень по умолчанию.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prodcal=warn,prodcallib=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // reader
    let input = File::open(&cli.input)
        .with_context(|| format!("cannot open input {}", cli.input.display()))?;
    let cal = YearTableCsv::read(BufReader::new(input))
        .with_context(|| format!("cannot parse {}", cli.input.display()))?;

    // writer: файл создаём только после успешного разбора
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    DailyCsv::write(&mut writer, &cal).context("cannot write daily CSV")?;
    writer.flush()?;

    tracing::info!(years = cal.years().len(), days = cal.day_count(), "done");
    Ok(())
}
