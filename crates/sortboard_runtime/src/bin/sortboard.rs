//! Sortboard CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use sortboard_runtime::{DelayConfig, Repl, Session};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    board_file: Option<PathBuf>,
    seed: Option<u64>,
    delay_ms: Option<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-s" | "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            "-d" | "--delay" => {
                i += 1;
                if i >= args.len() {
                    return Err("--delay requires a value".into());
                }
                config.delay_ms = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.board_file = Some(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("sortboard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut session = config.seed.map_or_else(Session::new, Session::with_seed);

    if let Some(input) = &config.delay_ms {
        session.set_delay(DelayConfig::from_input(input));
    }

    if let Some(path) = &config.board_file {
        session.load(path)?;
    }

    let mut repl = Repl::new()?.with_session(session);
    if config.board_file.is_some() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mSortboard\x1b[0m - sorting algorithm visualizer

\x1b[1mUSAGE:\x1b[0m
    sortboard [OPTIONS] [BOARD]

\x1b[1mARGUMENTS:\x1b[0m
    [BOARD]           Board snapshot file to load before starting

\x1b[1mOPTIONS:\x1b[0m
    -h, --help        Print help information
    -V, --version     Print version information
    -s, --seed N      Seed the RNG for deterministic generate/shuffle
    -d, --delay MS    Step delay in milliseconds (default 200)

\x1b[1mEXAMPLES:\x1b[0m
    sortboard                     Start the interactive visualizer
    sortboard -s 42 -d 50         Deterministic session, fast animation
    sortboard board.msgpack       Load a saved board, then start

\x1b[1mREPL COMMANDS:\x1b[0m
    set 5,3,8,1       Set the board from text
    gen 8 labeled     Generate a random labeled board
    algo heap         Select the algorithm (bubble, heap, shell)
    sort              Run it, animated
    help              Full command list"
    );
}
