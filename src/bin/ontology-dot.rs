//! ontology-dot CLI
//!
//! Reads ontology YAML on stdin, writes Graphviz DOT on stdout.
//!
//! # Usage
//!
//! ```bash
//! ontology-dot < ogit.yaml | dot -Tsvg > ogit.svg
//!
//! # Repeat verb edges for every sub-entity of their endpoints
//! ontology-dot --children < ogit.yaml > ogit.dot
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for more.

use std::io::{self, BufWriter};

use clap::Parser;
use ontology_dot::{IoSink, TranslateOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ontology-dot")]
#[command(about = "Render ontology YAML from stdin as Graphviz DOT on stdout", long_about = None)]
struct Cli {
    /// Propagate verb edges to all descendants of both endpoints
    #[arg(long = "children", visible_alias = "expand-hierarchy", env = "ONTOLOGY_DOT_CHILDREN")]
    children: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let options = TranslateOptions::default().with_expand_hierarchy(cli.children);

    let mut sink = IoSink::new(BufWriter::new(io::stdout().lock()));
    ontology_dot::dot_from_reader(io::stdin().lock(), &options, &mut sink)?;
    sink.flush()?;

    Ok(())
}
