use log::error;
use std::path::PathBuf;
use wordcount_bench::{run_word_count_benchmark, BenchmarkConfig, DEFAULT_NUM_WORKERS};

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let file_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: wordcount-bench-cli <text-file> [num-workers]");
            std::process::exit(1);
        }
    };

    let num_workers = match args.next() {
        Some(raw) => match raw.parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                error!("Invalid worker count: {}", raw);
                std::process::exit(1);
            }
        },
        None => DEFAULT_NUM_WORKERS,
    };

    let config = BenchmarkConfig { num_workers };

    println!("Starting word count comparison...");

    match run_word_count_benchmark(&file_path, config) {
        Ok(report) => {
            println!("{}", report);
        }
        Err(e) => {
            error!("Benchmark failed: {}", e);
            std::process::exit(1);
        }
    }
}
