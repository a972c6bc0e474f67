use clap::Parser;
use std::io::{self, Write};
use term_abbrev::{OutputFormat, TermRequest, init_tracing, render, respond, shell};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate abbreviation variants for an engineering term", long_about = None)]
struct Args {
    /// Term to abbreviate (e.g., "HORIZONTAL CG-LB"); prompts for terms when omitted
    #[arg(value_name = "TERM")]
    term: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    init_tracing("warn");
    let args = Args::parse();

    match args.term {
        Some(term) => {
            // Blank terms are a no-op, same as an empty form submission.
            if let Some(response) = respond(&TermRequest::new(term)) {
                let mut stdout = io::stdout().lock();
                stdout.write_all(render(&response, args.format)?.as_bytes())?;
            }
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            let answered = shell::run_interactive(stdin, stdout, args.format)?;
            tracing::debug!(answered, "input closed");
        }
    }

    Ok(())
}
