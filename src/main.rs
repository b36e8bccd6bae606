use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_engine::config::AppConfig;
use connect_four_engine::game::{PlacementMode, Session};

/// Play Connect Four on the terminal, one move per line.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play a game of Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override placement mode: column_drop or explicit_cell
    #[arg(long)]
    mode: Option<PlacementMode>,

    /// Override the first player's name
    #[arg(long)]
    first: Option<String>,

    /// Override the second player's name
    #[arg(long)]
    second: Option<String>,

    /// Render the board without column and row numbers
    #[arg(long)]
    no_header: bool,

    /// Print the round log as JSON when the game ends
    #[arg(long)]
    json_log: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(first) = cli.first {
        config.players.first = first;
    }
    if let Some(second) = cli.second {
        config.players.second = second;
    }
    if cli.no_header {
        config.game.show_header = false;
    }
    config.validate().context("validating configuration")?;

    let mut session = config.new_session();
    run(&mut session, config.game.show_header)?;

    if cli.json_log {
        println!("{}", session.log().to_json().context("serializing round log")?);
    } else {
        println!("{}", session.log());
    }
    Ok(())
}

fn run(session: &mut Session, header: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", session.render(header));
    prompt(&mut stdout, session)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading move")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }

        let coords = match parse_move(line) {
            Ok(coords) => coords,
            Err(err) => {
                eprintln!("{err}");
                prompt(&mut stdout, session)?;
                continue;
            }
        };

        let result = match coords {
            (column, None) => session.play(column),
            (column, Some(row)) => session.play_at(column, row),
        };
        match result {
            Ok(outcome) => println!("{}", outcome.message()),
            Err(err) => eprintln!("{err}"),
        }

        println!("{}", session.render(header));
        if session.is_over() {
            return Ok(());
        }
        prompt(&mut stdout, session)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write, session: &Session) -> Result<()> {
    write!(out, "{} > ", session.current_player_name())?;
    out.flush().context("flushing prompt")?;
    Ok(())
}

/// `"C"` or `"C R"`, 1-based.
fn parse_move(line: &str) -> Result<(i32, Option<i32>)> {
    let mut parts = line.split_whitespace();
    let column = match parts.next() {
        Some(part) => part
            .parse::<i32>()
            .with_context(|| format!("'{part}' is not a column number"))?,
        None => bail!("expected a column"),
    };
    let row = match parts.next() {
        Some(part) => Some(
            part.parse::<i32>()
                .with_context(|| format!("'{part}' is not a row number"))?,
        ),
        None => None,
    };
    if parts.next().is_some() {
        bail!("expected 'column' or 'column row'");
    }
    Ok((column, row))
}
