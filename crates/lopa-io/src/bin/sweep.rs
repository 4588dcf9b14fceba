use lopa_io::{init_tracing, read_graph, render};
use lopa_search::{MultiStartGreedy, PathSearch};
use std::io;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let graph = read_graph(io::stdin().lock())?;
    let best = MultiStartGreedy::default().search(&graph);
    print!("{}", render(&graph, &best));
    Ok(())
}
