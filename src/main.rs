//! `surt` command: reads URLs from stdin, one per line, and writes one key
//! per line to stdout.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{Context, Result, anyhow};
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;
use surt::{DefaultIaCanonicalizer, Format, SurtOptions, canonicalize_url, try_surt_with};
use tracing_subscriber::EnvFilter;

fn usage() -> String {
    "Usage: surt [OPTIONS] < urls.txt

Reads one URL per line from stdin and writes one key per line to stdout.

Options:
  --canonical          write the canonicalized URL instead of a SURT key
  --with-scheme        keep `scheme://(` in front of the key
  --trailing-comma     close the host with `,)`
  --reverse-ipaddr     reverse dotted-quad hosts like names
  --public-suffix      reduce hosts to their registered domain
  --ssurt              write the experimental SSURT layout
  --no-host-massage    keep a leading `www.` label
  --keep-www           same as --no-host-massage
  --no-query-reorder   keep query parameters in their original order
  --keep-session-ids   keep session ids in paths and queries
  -h, --help           print this help

Set RUST_LOG (e.g. RUST_LOG=debug) to see why lines fell back."
        .to_string()
}

#[derive(Debug, Default, PartialEq)]
struct Cli {
    canonical: bool,
    help: bool,
    options: SurtOptions,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        let mut cli = Self::default();
        let options = &mut cli.options;

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "--canonical" => cli.canonical = true,
                "--with-scheme" => options.format.with_scheme = true,
                "--trailing-comma" => options.format.trailing_comma = true,
                "--reverse-ipaddr" => options.format.reverse_ipaddr = true,
                "--public-suffix" => options.format.public_suffix = true,
                "--ssurt" => options.format_kind = Format::Ssurt,
                "--no-host-massage" | "--keep-www" => options.canonicalize.host_massage = false,
                "--no-query-reorder" => options.canonicalize.query_alpha_reorder = false,
                "--keep-session-ids" => {
                    options.canonicalize.path_strip_session_id = false;
                    options.canonicalize.query_strip_session_id = false;
                }
                other => return Err(anyhow!("unknown argument `{other}`\n\n{}", usage())),
            }
        }

        if cli.canonical && cli.options.format_kind == Format::Ssurt {
            return Err(anyhow!("--canonical and --ssurt cannot be combined\n\n{}", usage()));
        }

        Ok(cli)
    }

    /// Key for one input line. On failure the line itself stands in for
    /// the key so output stays aligned with input.
    fn key(&self, line: &str, canonicalizer: &DefaultIaCanonicalizer) -> (String, Option<String>) {
        let result = if self.canonical {
            canonicalize_url(line, &self.options.canonicalize)
        } else {
            try_surt_with(line, &self.options, canonicalizer)
        };

        match result {
            Ok(key) => (key, None),
            Err(err) => (line.to_string(), Some(err.to_string())),
        }
    }
}

/// Process every line of `input`. Returns the number of lines that failed.
fn run(cli: &Cli, input: impl BufRead, mut output: impl Write, mut errors: impl Write) -> Result<usize> {
    let canonicalizer = DefaultIaCanonicalizer::new();
    let mut failed = 0;

    for (index, line) in input.split(b'\n').enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("failed to read line {number}"))?;
        let line = String::from_utf8_lossy(&line);
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let (key, error) = cli.key(line, &canonicalizer);
        if let Some(error) = error {
            failed += 1;
            tracing::debug!(line = number, %error, "line failed");
            writeln!(errors, "line {number}: {error}").context("failed to write to stderr")?;
        }
        writeln!(output, "{key}").context("failed to write to stdout")?;
    }

    output.flush().context("failed to flush stdout")?;
    Ok(failed)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli = match Cli::parse(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        println!("{}", usage());
        return ExitCode::SUCCESS;
    }

    let stdout = io::stdout();
    match run(&cli, io::stdin().lock(), BufWriter::new(stdout.lock()), io::stderr()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            tracing::warn!(failed, "some lines could not be parsed");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
