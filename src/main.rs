//! Arbitrage Cycle Engine - CLI launcher
//!
//! Loads a currency symbol universe and replays a tick file through the
//! engine, printing any negative (arbitrage) cycles as they're detected.
//!
//! Run with: cargo run -- --symbols demos/symbols.txt --ticks demos/ticks.jsonl

use std::fs;

use clap::Parser;
use color_eyre::eyre::Result;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arb_cycle_engine::config::Config;
use arb_cycle_engine::feed::{spawn_replay, Tick};
use arb_cycle_engine::ArbitrageEngine;

#[derive(Parser, Debug)]
#[command(about = "Incremental negative-cycle arbitrage detection engine")]
struct Args {
    /// Path to a newline-delimited symbol universe file.
    #[arg(long)]
    symbols: Option<String>,

    /// Path to a JSON-lines tick replay file.
    #[arg(long)]
    ticks: Option<String>,
}

fn print_banner() {
    println!();
    println!("{}", style("=============================================").cyan());
    println!("{}", style(" ARBITRAGE CYCLE ENGINE").cyan().bold());
    println!("{}", style("=============================================").cyan());
    println!();
}

fn load_symbols(path: &str) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn load_ticks(path: &str) -> Result<Vec<Tick>> {
    let contents = fs::read_to_string(path)?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arb_cycle_engine=info".parse()?),
        )
        .init();

    print_banner();

    let args = Args::parse();
    let config = Config::from_env()?;
    let symbols_path = args.symbols.unwrap_or(config.symbols_file);
    let ticks_path = args.ticks.unwrap_or(config.ticks_file);

    println!("{} Loading symbol universe from {}", style("=>").blue(), symbols_path);
    let symbols = load_symbols(&symbols_path)?;
    println!("{} {} currencies registered", style("ok").green(), symbols.len());

    let mut engine = ArbitrageEngine::new(&symbols);

    println!("{} Loading tick replay from {}", style("=>").blue(), ticks_path);
    let ticks = load_ticks(&ticks_path)?;
    println!("{} {} ticks queued", style("ok").green(), ticks.len());

    let rx = spawn_replay(ticks, 64);

    let mut cycles_found = 0;
    while let Ok(tick) = rx.recv() {
        if tick.is_stop() {
            break;
        }

        match engine.update_price(&tick.symbol, tick.price) {
            Ok(()) => {}
            Err(err) => {
                println!("{} {}: {}", style("warn").yellow(), tick.symbol, err);
                continue;
            }
        }

        if let Some(cycle) = engine.find_arbitrage_cycle() {
            cycles_found += 1;
            println!(
                "{} {}",
                style("cycle").magenta().bold(),
                style(cycle.join(" -> ")).cyan()
            );
        }
    }

    println!();
    if cycles_found == 0 {
        println!("{}", style("No arbitrage cycles detected.").yellow());
    } else {
        println!(
            "{}",
            style(format!("{cycles_found} arbitrage cycle(s) detected.")).green().bold()
        );
    }

    Ok(())
}
