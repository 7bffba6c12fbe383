//! Smooshed-Morse pipeline CLI
//!
//! Encodes a newline-delimited word list into smooshed Morse using N
//! parallel workers over a single preallocated arena, then runs the three
//! analytical scans and prints their results.
//!
//! # Output Format
//!
//! Scan results are written to stdout, one line each:
//! `run: <index> <input> <encoded>` (or `run: not found`), and likewise for
//! `repeated:` and `balanced:`.
//!
//! Statistics are written to stderr upon completion:
//! `lines=N bytes_in=N bytes_out=N arena=N workers=N encode_ms=N scan_ms=N`
//!
//! # Exit Codes
//!
//! - `0`: Success (regardless of whether any scan matched)
//! - `2`: Invalid arguments, unreadable input, or encode failure

use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use smoosh_rs::{
    encode, find_balanced, find_first_repeated, find_first_run, Corpus, SymbolTable, DASH, DOT,
};

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS] <input-file>

OPTIONS:
    --workers=<N>           Number of parallel workers (default: auto-detect CPU count)
    --run-mark=<.|->        Mark for the longest-run scan (default: -)
    --min-run=<N>           Consecutive marks required (default: 15)
    --min-repeats=<N>       Occurrences required by the duplicate scan (default: 2)
    --balanced-max=<N>      Max results from the balance scan (default: 10)
    --balanced-min-len=<N>  Minimum input length for the balance scan (default: 21)
    --help, -h              Show this help message",
        exe.to_string_lossy()
    );
}

fn parse_number(flag: &str, value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid {flag} value: {value}");
        process::exit(2);
    })
}

fn main() {
    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "smoosh-rs".into());

    let mut path: Option<PathBuf> = None;
    let mut workers: Option<usize> = None;
    let mut run_mark = DASH;
    let mut min_run = 15;
    let mut min_repeats = 2;
    let mut balanced_max = 10;
    let mut balanced_min_len = 21;

    for arg in args {
        if let Some(flag) = arg.to_str() {
            if let Some(value) = flag.strip_prefix("--workers=") {
                let n = parse_number("--workers", value);
                if n == 0 {
                    eprintln!("--workers must be at least 1");
                    process::exit(2);
                }
                workers = Some(n);
                continue;
            }
            if let Some(value) = flag.strip_prefix("--run-mark=") {
                run_mark = match value {
                    "." => DOT,
                    "-" => DASH,
                    other => {
                        eprintln!("invalid --run-mark value: {other} (expected . or -)");
                        process::exit(2);
                    }
                };
                continue;
            }
            if let Some(value) = flag.strip_prefix("--min-run=") {
                min_run = parse_number("--min-run", value);
                continue;
            }
            if let Some(value) = flag.strip_prefix("--min-repeats=") {
                min_repeats = parse_number("--min-repeats", value);
                continue;
            }
            if let Some(value) = flag.strip_prefix("--balanced-max=") {
                balanced_max = parse_number("--balanced-max", value);
                continue;
            }
            if let Some(value) = flag.strip_prefix("--balanced-min-len=") {
                balanced_min_len = parse_number("--balanced-min-len", value);
                continue;
            }
            if flag == "--help" || flag == "-h" {
                print_usage(&exe);
                return;
            }
            if flag.starts_with("--") {
                eprintln!("unknown option: {flag}");
                print_usage(&exe);
                process::exit(2);
            }
        }
        if path.is_some() {
            eprintln!("unexpected extra argument: {}", arg.to_string_lossy());
            process::exit(2);
        }
        path = Some(PathBuf::from(arg));
    }

    let Some(path) = path else {
        print_usage(&exe);
        process::exit(2);
    };
    if min_run == 0 {
        eprintln!("--min-run must be at least 1");
        process::exit(2);
    }
    let workers = workers.unwrap_or_else(|| num_cpus::get().max(1));

    let corpus = match Corpus::load(&path) {
        Ok(corpus) => corpus,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    let table = SymbolTable::morse();

    let encode_start = Instant::now();
    let encoded = match encode(&corpus, &table, workers) {
        Ok(encoded) => encoded,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    let encode_elapsed = encode_start.elapsed();

    let scan_start = Instant::now();

    match find_first_run(&encoded, run_mark, min_run) {
        Some(index) => {
            let input = String::from_utf8_lossy(corpus.get(index)).into_owned();
            let output = String::from_utf8_lossy(encoded.get(index)).into_owned();
            println!("run: {index} {input} {output}");
        }
        None => println!("run: not found"),
    }

    match find_first_repeated(&encoded, min_repeats) {
        Some(value) => println!("repeated: {}", String::from_utf8_lossy(value)),
        None => println!("repeated: not found"),
    }

    let balanced = find_balanced(&corpus, &encoded, balanced_max, balanced_min_len, DASH, DOT);
    if balanced.is_empty() {
        println!("balanced: not found");
    } else {
        for index in &balanced {
            let input = String::from_utf8_lossy(corpus.get(*index)).into_owned();
            println!("balanced: {index} {input}");
        }
    }

    let scan_elapsed = scan_start.elapsed();

    eprintln!(
        "lines={} bytes_in={} bytes_out={} arena={} workers={} encode_ms={} scan_ms={}",
        corpus.len(),
        corpus.total_bytes(),
        encoded.bytes_used(),
        encoded.arena_len(),
        workers,
        encode_elapsed.as_millis(),
        scan_elapsed.as_millis(),
    );
}
