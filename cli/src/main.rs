use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use uncopy_common::ConvertStats;
use uncopy_parser::Converter;

/// Convert the COPY blocks of a PostgreSQL dump into replayable INSERT
/// statements
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the SQL dump to convert
    input: PathBuf,

    /// Where to write the converted dump (defaults to
    /// `<stem>_converted.<ext>` next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let bytes = match std::fs::read(&args.input) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Error reading dump file: {}", err);
            std::process::exit(1);
        }
    };
    // Invalid byte sequences become U+FFFD so the pass always completes.
    let input = String::from_utf8_lossy(&bytes);

    let output_path = args
        .output
        .unwrap_or_else(|| converted_path(&args.input));
    let file = match File::create(&output_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error creating output file: {}", err);
            std::process::exit(1);
        }
    };
    let mut writer = BufWriter::new(file);

    let converter = Converter::new();
    let stats: ConvertStats = match converter.convert(&input, &mut writer) {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("Error converting dump: {}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = writer.flush() {
        eprintln!("Error writing output file: {}", err);
        std::process::exit(1);
    }

    println!("{}", stats);
}

/// Derive the default output path: `dump.sql` becomes `dump_converted.sql`
/// next to the input.
fn converted_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dump");
    let mut name = format!("{}_converted", stem);
    if let Some(ext) = input.extension().and_then(|ext| ext.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    input.with_file_name(name)
}
