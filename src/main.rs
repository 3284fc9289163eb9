mod app;
mod chart;
mod color;
mod data;
mod ui;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::info;

/// Chart batch uncertainty, test R2 and test MAE over active-learning
/// iterations parsed from a partial-results log.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Partial results log file
    #[arg(default_value = "partial_results.txt")]
    file: PathBuf,

    /// Output image file
    #[arg(short, long, default_value = "partial_results.png")]
    out: PathBuf,

    /// Also write the parsed table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Save the chart without opening the interactive window
    #[arg(long)]
    no_show: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.file.exists() {
        eprintln!("File not found: {}", args.file.display());
        process::exit(1);
    }

    let table = data::loader::load_log(&args.file)?;
    info!("parsed {} records from {}", table.len(), args.file.display());
    print!("{}", table.preview(5));

    if let Some(csv_path) = &args.csv {
        data::export::write_csv(&table, csv_path)?;
        println!("Saved table to: {}", csv_path.display());
    }

    chart::save_png(&table, &args.out)?;
    println!("Saved figure to: {}", args.out.display());

    if !args.no_show {
        app::show_window(table).map_err(|e| anyhow::anyhow!("showing chart window: {e}"))?;
    }
    Ok(())
}
