//! shortest-route CLI entry point.
//!
//! All user-facing formatting lives here; the library only returns
//! structured results.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use shortest_route::parsers::extract_nodes;
use shortest_route::{RouteOutcome, RouteQuery, run_query};

/// Shortest route between two nodes of a weighted edge list.
#[derive(Parser, Debug)]
#[command(
    name = "shortest-route",
    about = "Shortest route between two nodes of a weighted edge list"
)]
struct Cli {
    /// Input edge-list file (reads from stdin if not provided)
    input: Option<String>,

    /// Source node identifier
    #[arg(short = 's', long = "source")]
    source: Option<String>,

    /// Target node identifier
    #[arg(short = 't', long = "target")]
    target: Option<String>,

    /// Treat edges as one-way (default is undirected)
    #[arg(long = "directed")]
    directed: bool,

    /// Print the sorted node list and exit
    #[arg(short = 'n', long = "nodes")]
    nodes: bool,

    /// Also print the full distance table
    #[arg(long = "distances")]
    distances: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

/// Format a distance, dropping the trailing `.0` on integral values.
fn fmt_distance(d: f64) -> String {
    if d == d.trunc() && d.abs() < 1e15 {
        format!("{}", d as i64)
    } else {
        d.to_string()
    }
}

fn solve(cli: &Cli, text: &str) -> Result<String, String> {
    let (Some(source), Some(target)) = (cli.source.as_deref(), cli.target.as_deref()) else {
        return Err("--source and --target are required (or use --nodes)".to_string());
    };

    let query = RouteQuery {
        edges: text,
        source,
        target,
        undirected: !cli.directed,
    };
    let report = run_query(&query).map_err(|e| e.to_string())?;

    let mut out = String::new();
    match &report.outcome {
        RouteOutcome::Found { path, total } => {
            out.push_str(&format!("path: {}\n", path.join(" -> ")));
            out.push_str(&format!("distance: {}\n", fmt_distance(*total)));
        }
        RouteOutcome::Unreachable => {
            out.push_str(&format!("no path from {source} to {target}\n"));
        }
    }

    if cli.distances {
        let mut rows: Vec<(&String, &f64)> = report.distances.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        out.push_str("distances:\n");
        for (node, d) in rows {
            if d.is_finite() {
                out.push_str(&format!("  {} {}\n", node, fmt_distance(*d)));
            } else {
                out.push_str(&format!("  {node} unreachable\n"));
            }
        }
    }

    Ok(out)
}

fn main() {
    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let rendered = if cli.nodes {
        let mut out = String::new();
        for node in extract_nodes(&text) {
            out.push_str(&node);
            out.push('\n');
        }
        out
    } else {
        match solve(&cli, &text) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        match fs::write(path, rendered) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
