//! `transit-atlas` — offline transit query engine.
//!
//! Reads one JSON input document (network declarations, settings, and a
//! batch of stat requests), builds the network once, and writes the JSON
//! response array.  No flags are required: the default is a stdin→stdout
//! filter.
//!
//! ```text
//! transit-atlas < queries.json > answers.json
//! transit-atlas --input queries.json --output answers.json --pretty
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use structopt::StructOpt;

use atlas_json::{Engine, InputDocument, Response};

#[derive(Debug, StructOpt)]
#[structopt(name = "transit-atlas", about = "Offline transit network query engine")]
struct Options {
    /// Input document path; reads stdin when omitted.
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output path; writes stdout when omitted.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Pretty-print the response array.
    #[structopt(long)]
    pretty: bool,
}

fn read_document(options: &Options) -> Result<InputDocument> {
    match &options.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("malformed input document {}", path.display()))
        }
        None => serde_json::from_reader(io::stdin().lock())
            .context("malformed input document on stdin"),
    }
}

fn write_responses(options: &Options, responses: &[Response]) -> Result<()> {
    let mut out: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("cannot create output {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };
    if options.pretty {
        serde_json::to_writer_pretty(&mut out, responses)?;
    } else {
        serde_json::to_writer(&mut out, responses)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();

    let document = read_document(&options)?;
    info!(
        "processing {} base requests and {} stat requests",
        document.base_requests.len(),
        document.stat_requests.len()
    );

    let responses = Engine::process(&document)?;
    write_responses(&options, &responses)?;
    Ok(())
}
