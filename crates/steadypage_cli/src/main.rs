//! CLI probe over the pagination core.
//!
//! # Responsibility
//! - Resolve the dataset path and paging arguments from the command line.
//! - Print one deletion-resilient page and the index to resume from.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use steadypage_core::{DelimitedFileSource, Paginator, DEFAULT_PAGE_SIZE};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("steadypage: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(path) = args.first() else {
        return Err("usage: steadypage <dataset-file> [start_index] [page_size]".to_string());
    };

    let start_index = match args.get(1) {
        Some(raw) => Some(parse_count("start_index", raw)?),
        None => None,
    };
    let page_size = match args.get(2) {
        Some(raw) => parse_count("page_size", raw)?,
        None => DEFAULT_PAGE_SIZE,
    };

    let paginator = Paginator::new(DelimitedFileSource::new(path.as_str()));
    let page = paginator
        .get_index_page(start_index, page_size)
        .map_err(|err| err.to_string())?;

    for record in &page.records {
        println!("{}", record.fields().join(", "));
    }
    println!("-- served={} next_index={}", page.page_size, page.next_index);

    Ok(())
}

fn parse_count(name: &str, raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("{name} must be a non-negative integer, got `{raw}`"))
}
