use clap::Parser;
use lopa_io::{init_tracing, read_graph, render, JumpArgs};
use lopa_search::{PathSearch, RandomJump};
use std::io;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = JumpArgs::parse();

    let graph = read_graph(io::stdin().lock())?;
    let strategy = RandomJump {
        stagnation: args.stagnation(),
        ..RandomJump::default()
    };
    let best = strategy.search(&graph);
    print!("{}", render(&graph, &best));
    Ok(())
}
