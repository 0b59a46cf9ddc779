mod repl;

use std::process::exit;

use clap::Parser;
use repl::Repl;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tealex::cli::Cli;
use tealex::{load, run};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Some(script) = &cli.script {
        let code = load(script)?;
        if !run(script, &code, !cli.no_comments)? {
            exit(1);
        }
    } else {
        repl(Repl::new(!cli.no_comments))?;
    }

    Ok(())
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn repl(mut state: Repl) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                state.rep(&line)?;
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e),
        }
    }
}
