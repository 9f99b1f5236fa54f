//! CLI tool: reconstruct text-block page records from a raw-run dump

use pdf_blocks::{reconstruct_document, JsonRunSource, MergeConfig};
use std::env;
use std::fs;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let pretty = args.iter().any(|a| a == "--pretty");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--pretty").collect();

    if positional.is_empty() {
        eprintln!("Usage: {} <runs.json | -> [output.json] [--pretty]", args[0]);
        eprintln!();
        eprintln!("Reads a JSON dump of extracted text runs (use '-' for stdin)");
        eprintln!("and writes reconstructed page records as JSON.");
        process::exit(1);
    }

    let input = positional[0];
    let output_file = positional.get(1);

    let source = if input == "-" {
        JsonRunSource::from_reader(io::stdin().lock())
    } else {
        JsonRunSource::from_path(input)
    };

    let source = match source {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match reconstruct_document(&source, &MergeConfig::default()) {
        Ok(pages) => {
            let json = if pretty {
                serde_json::to_string_pretty(&pages)
            } else {
                serde_json::to_string(&pages)
            }
            .expect("page records serialize");

            if let Some(output) = output_file {
                fs::write(output, &json).expect("Failed to write output file");
                eprintln!("Wrote {} pages to {}", pages.len(), output);
            } else {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
