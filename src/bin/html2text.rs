//! Command line front end: reads HTML from a file or stdin and prints text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use html2text::{convert_bytes_with_options, Options};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "html2text")]
#[command(about = "Convert HTML to readable plain text")]
#[command(version)]
struct Cli {
    /// HTML file to read (stdin when omitted)
    file: Option<PathBuf>,

    /// Use \n instead of \r\n for line breaks
    #[arg(long)]
    unix: bool,

    /// Keep link text and append the href in angle brackets
    #[arg(long)]
    links_inner_text: bool,

    /// Prefix list items with " - "
    #[arg(long)]
    lists: bool,

    /// Maximum number of nested open links
    #[arg(long, value_name = "N")]
    max_link_depth: Option<usize>,

    /// Options as a JSON mapping, e.g. '{"unixLineBreaks": true}'; flags are applied on top
    #[arg(long, value_name = "JSON")]
    options: Option<String>,

    /// Print a JSON object instead of raw text
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Output<'a> {
    options: &'a Options,
    text: &'a str,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

impl Cli {
    fn resolve_options(&self) -> html2text::Result<Options> {
        let mut options = match &self.options {
            Some(json) => Options::from_json(json)?,
            None => Options::default(),
        };
        options.unix_line_breaks |= self.unix;
        options.links_inner_text |= self.links_inner_text;
        options.list_support |= self.lists;
        if self.max_link_depth.is_some() {
            options.max_link_depth = self.max_link_depth;
        }
        Ok(options)
    }

    fn read_input(&self) -> html2text::Result<Vec<u8>> {
        let bytes = match &self.file {
            Some(path) => fs::read(path)?,
            None => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer)?;
                buffer
            }
        };
        Ok(bytes)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = cli.resolve_options()?;
    let html = cli.read_input()?;
    debug!(bytes = html.len(), ?options, "converting");

    let text = convert_bytes_with_options(&html, &options);

    if cli.json {
        let output = Output {
            options: &options,
            text: &text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "conversion failed");
            eprintln!("html2text: {err}");
            ExitCode::FAILURE
        }
    }
}
