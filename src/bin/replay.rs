//! Minimal scripted replay: feed a fixed sequence of ticks through the
//! engine and print each detected cycle, without the full CLI/config
//! machinery in `main.rs`. Useful for quick manual smoke-testing.

use arb_cycle_engine::ArbitrageEngine;

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let symbols = ["A-B", "B-C", "A-C"];
    let mut engine = ArbitrageEngine::new(symbols);

    let ticks: &[(&str, f64)] = &[("A-B", 2.0), ("B-C", 3.0), ("A-C", 6.0), ("A-C", 5.0)];

    for (symbol, price) in ticks {
        if let Err(err) = engine.update_price(symbol, *price) {
            eprintln!("update_price({symbol}, {price}) failed: {err}");
            continue;
        }

        match engine.find_arbitrage_cycle() {
            Some(cycle) => println!("cycle: {}", cycle.join(" -> ")),
            None => println!("{symbol}={price}: no cycle"),
        }
    }
}
