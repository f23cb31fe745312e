use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use qsv_preamble::source::Source;
use qsv_preamble::{MemorySource, Preprocessor};

#[derive(Parser, Debug)]
#[command(name = "preamble", version, about = "Locate where the data of a CSV file begins")]
struct Cli {
    /// CSV file to examine.
    file: PathBuf,
    /// Number of leading rows to skip.
    #[arg(long, short = 's', default_value_t = 0, allow_negative_numbers = true)]
    skip: i64,
    /// Comment prefix; lines starting with it are skipped.
    #[arg(long, short = 'c', default_value = "")]
    comment: String,
    /// Do not skip blank lines following the skipped rows.
    #[arg(long)]
    keep_empty_rows: bool,
    /// Do not strip a leading byte-order mark.
    #[arg(long)]
    keep_bom: bool,
    /// Print the first N records found after the data start.
    #[arg(long, short = 'p', default_value_t = 0)]
    preview: usize,
    /// Treat the first data row as a record rather than a header.
    #[arg(long)]
    no_headers: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> qsv_preamble::Result<()> {
    let mut pre = Preprocessor::new();
    pre.skip(cli.skip)
        .comment(&cli.comment)
        .skip_empty_rows(!cli.keep_empty_rows)
        .skip_bom(!cli.keep_bom)
        .has_header_row(!cli.no_headers);

    let source = MemorySource::from_path(&cli.file)?;
    let start = pre.locate_source(&source);
    println!("{}", start);

    if cli.preview > 0 {
        let mut reader = pre.open_reader(source.bytes());
        if !cli.no_headers {
            println!("Header: {:?}", reader.byte_headers()?);
        }
        for record in reader.byte_records().take(cli.preview) {
            println!("{:?}", record?);
        }
    }
    Ok(())
}
