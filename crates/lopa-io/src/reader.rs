use lopa_core::{Graph, GraphBuilder, Weight};
use std::io::Read;
use thiserror::Error;

/// Name given to the placeholder vertex synthesized when the header
/// declares vertices but the edge stream names none.
const PLACEHOLDER_NAME: &str = "v0";

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("missing graph header")]
    MissingHeader,
    #[error("malformed graph header token {0:?}")]
    BadHeader(String),
    #[error("graph declares no vertices")]
    EmptyGraph,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse a graph from whitespace-delimited text.
///
/// The token stream is newline-agnostic: a header of two integers
/// `n m`, then up to `m` triples `<name> <name> <weight>`. A missing or
/// unparsable header (or `n = 0`) is a hard error. A malformed or
/// missing token inside the edge stream truncates it silently and the
/// graph is built from the edges parsed so far.
pub fn parse_graph(input: &str) -> Result<Graph, ReadError> {
    let mut tokens = input.split_whitespace();

    let n = header_token(tokens.next())?;
    let m = header_token(tokens.next())?;
    if n == 0 {
        return Err(ReadError::EmptyGraph);
    }

    let mut builder = GraphBuilder::with_capacity(n);
    for _ in 0..m {
        let (Some(u), Some(v), Some(w)) = (tokens.next(), tokens.next(), tokens.next()) else {
            break;
        };
        let Ok(weight) = w.parse::<Weight>() else {
            break;
        };
        builder.add_edge(u, v, weight);
    }

    // An edge-free input still has to offer the solver a start vertex;
    // names are only discoverable from edges, so synthesize one.
    if builder.is_empty() {
        builder.add_vertex(PLACEHOLDER_NAME);
    }

    let graph = builder.finish();
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        declared_vertices = n,
        declared_edges = m,
        "graph loaded"
    );
    Ok(graph)
}

/// Read a graph from a stream (typically stdin).
pub fn read_graph(mut input: impl Read) -> Result<Graph, ReadError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_graph(&text)
}

fn header_token(token: Option<&str>) -> Result<usize, ReadError> {
    let token = token.ok_or(ReadError::MissingHeader)?;
    token
        .parse::<usize>()
        .map_err(|_| ReadError::BadHeader(token.to_string()))
}
