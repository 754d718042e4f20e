//! mudmap CLI entry point.

use std::env;
use std::process::ExitCode;

use mudmap_core::Host;
use mudmap_runtime::session::describe_store;
use mudmap_runtime::{Repl, RuntimeConfig, Session};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: impl Iterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = RuntimeConfig::from_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mudmap {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(&config);

    let mut session = Session::new();

    if let Some(path) = &config.load {
        session.load_snapshot(path)?;
    }

    if config.debug {
        let name = session.mapper().config().debug_variable.clone();
        session.host_mut().set_variable(&name, "true");
    }

    for transcript in &config.transcripts {
        session.replay_file(transcript)?;
    }

    if config.dump_map {
        println!("\x1b[1;36m=== Map ===\x1b[0m");
        println!("{}", describe_store(session.store()));
        println!();
    }

    if !config.batch_mode {
        let mut repl = Repl::new()?.with_session(session);
        if !config.transcripts.is_empty() {
            repl = repl.without_banner();
        }
        repl.run()?;
        session = repl.into_session();
    }

    if let Some(path) = &config.save {
        session.save(path)?;
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mmudmap\x1b[0m - Automapper for MUD transcripts

\x1b[1mUSAGE:\x1b[0m
    mudmap [OPTIONS] [TRANSCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [TRANSCRIPTS...]    MUD output logs replayed before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Replay transcripts and exit (no REPL)
    -v, --verbose       Debug-level logging (RUST_LOG overrides)
    --debug             Start with automapper_debug=true
    --load PATH         Load a map snapshot before replaying
    --save PATH         Save a map snapshot before exiting
    --dump-map          Print the map after replaying

\x1b[1mEXAMPLES:\x1b[0m
    mudmap                              Start interactive REPL
    mudmap -b --dump-map session.log    Replay a log and print the map
    mudmap --load map.msgpack           Continue a saved map

\x1b[1mREPL COMMANDS:\x1b[0m
    #vars [name=value]   List or set client variables
    #map [on|off]        Summarize or toggle the map
    #triggers            List triggers
    #save PATH           Save a map snapshot
    #load PATH           Load a map snapshot
    #quit, Ctrl+D        Exit REPL"
    );
}
