use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use searchbox::{demo, Report};
use searchbox_core::Grammar;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "searchbox")]
#[command(about = "Parse search-box queries into terms and field filters")]
#[command(version)]
struct Args {
    /// Queries to parse; one per line is read from stdin when none are given
    queries: Vec<String>,

    /// Treat ':' as a word character instead of a field separator
    #[arg(long)]
    terms_only: bool,

    /// Print each result as a single JSON line
    #[arg(long)]
    json: bool,

    /// Parse the built-in sample queries
    #[arg(long, conflicts_with = "queries")]
    demo: bool,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> searchbox::Result<ExitCode> {
    let args = Args::parse();
    searchbox::tracing::init_with_filter(&args.log_level);

    let grammar = if args.terms_only {
        Grammar::TERMS_ONLY
    } else {
        Grammar::FIELDS
    };
    debug!(?grammar, json = args.json, "starting");

    let queries: Vec<String> = if args.demo {
        demo::queries(&grammar).iter().map(|q| q.to_string()).collect()
    } else if !args.queries.is_empty() {
        args.queries
    } else {
        io::stdin()
            .lock()
            .lines()
            .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .collect::<Result<_, _>>()?
    };

    let mut failures = 0usize;
    for query in &queries {
        match Report::parse(query, &grammar) {
            Ok(report) if args.json => println!("{}", report.to_json()?),
            Ok(report) => println!("{}", report),
            Err(e) => {
                failures += 1;
                eprintln!("Error parsing query {:?}: {}", query, e);
            }
        }
    }

    info!(total = queries.len(), failures, "done");
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
