use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use scel_reader::scel::convert;

#[derive(Parser)]
#[command(
    about = "Convert Sogou cell dictionaries (.scel) to text.",
    long_about = "Convert Sogou cell dictionaries (.scel) to text.\n\n\
                  Each word becomes one line: \"word\\tpinyin\\tfrequency\"."
)]
struct Args {
    /// A .scel file, or a directory searched recursively for .scel files.
    input: PathBuf,

    /// Frequency written for every word of the dictionary.
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    frequency: i64,

    /// Write the .txt files here instead of next to each input.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let input = &args.input;
    let output_dir = args.output_dir.as_deref();

    if input.is_file() && convert::is_scel_file(input) {
        let output = convert::output_path(input, input, output_dir);
        let summary = convert::process_file(input, &output, args.frequency)
            .with_context(|| format!("failed to convert {}", input.display()))?;
        for diagnostic in &summary.diagnostics {
            println!("  note: {}", diagnostic);
        }
        println!(
            "{} → {} ({} words)",
            summary.input.display(),
            summary.output.display(),
            summary.words
        );
        Ok(())
    } else if input.is_dir() {
        let summary = convert::process_directory(input, args.frequency, output_dir)
            .with_context(|| format!("failed to walk {}", input.display()))?;

        for converted in &summary.converted {
            println!(
                "{} → {} ({} words)",
                converted.input.display(),
                converted.output.display(),
                converted.words
            );
            for diagnostic in &converted.diagnostics {
                println!("  note: {}", diagnostic);
            }
        }
        println!("{}", "=".repeat(60));
        println!(
            "Converted {} file(s), {} failed",
            summary.converted.len(),
            summary.failed.len()
        );
        for (path, e) in &summary.failed {
            eprintln!("  {}: {}", path.display(), e);
        }
        if !summary.all_converted() {
            anyhow::bail!(
                "{} of {} file(s) failed to convert",
                summary.failed.len(),
                summary.failed.len() + summary.converted.len()
            );
        }
        Ok(())
    } else {
        anyhow::bail!(
            "{} is neither a .scel file nor a directory",
            input.display()
        )
    }
}
