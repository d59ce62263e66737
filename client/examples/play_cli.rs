//! Terminal treatmon
//!
//! Plays a session from stdin. Pass a JSON config path as the first
//! argument to override the defaults, and set `RUST_LOG=debug` to see the
//! rolls behind every action.

use std::io::{self, Write};

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use treatmon_battle::types::species;
use treatmon_client::{GameConfig, GameSession, SessionHandle, spawn_session};

fn print_help() {
    println!("Commands:");
    println!("  starter <name>        - Pick your first creature");
    println!("  explore <tier>        - Enter an area (1-3)");
    println!("  move <dir> | up/down/left/right");
    println!("  leave                 - Leave the area");
    println!("  attack | catch | flee - Battle actions");
    println!("  swap [slot]           - Send in another creature");
    println!("  inventory             - List your creatures");
    println!("  active <slot>         - Choose your lead creature");
    println!("  evolvable             - List creatures that can still evolve");
    println!("  evolve <slot> <slot>  - Merge two of the same kind");
    println!("  help | quit");
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

async fn handle_input(line: &str, handle: &SessionHandle) -> bool {
    let line = line.trim();
    match line {
        "" => {}
        "help" => print_help(),
        "quit" => return false,
        _ => match handle.send_line(line).await {
            Ok(events) => {
                for event in events {
                    println!("{}", event);
                }
            }
            Err(e) => println!("Error: {}", e),
        },
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    println!("Treatmon");
    println!("========");
    println!("Choose a starter:");
    for s in species::starters() {
        println!("  {} ({})", s.name, s.element);
    }
    print_help();

    let (handle, task) = spawn_session(GameSession::new(config, StdRng::from_entropy()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        if !handle_input(&line, &handle).await {
            break;
        }
        prompt()?;
    }

    drop(handle);
    let session = task.await?;
    println!("Goodbye! You leave with {} creature(s).", session.roster().len());
    Ok(())
}
