use bitvec::prelude::*;
use lopa_core::{AdjEntry, PathRecord, VertexId, Weight};

/// Mutable state of one walk attempt: visited bit-set, the path built so
/// far, and its running weight. Created fresh per attempt; only the
/// `PathRecord` summary survives.
#[derive(Debug)]
pub struct WalkState {
    visited: BitVec,
    path: Vec<VertexId>,
    current: VertexId,
    total: Weight,
}

impl WalkState {
    pub fn start(n: usize, start: VertexId) -> Self {
        let mut visited = bitvec![0; n];
        visited.set(start, true);
        Self {
            visited,
            path: vec![start],
            current: start,
            total: 0.0,
        }
    }

    pub fn current(&self) -> VertexId {
        self.current
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v]
    }

    /// Traverse an arc: mark the destination visited and accumulate the
    /// weight of the arc actually taken (not necessarily the heaviest
    /// parallel edge).
    pub fn advance(&mut self, arc: &AdjEntry) {
        self.visited.set(arc.to, true);
        self.path.push(arc.to);
        self.total += arc.weight;
        self.current = arc.to;
    }

    pub fn weight(&self) -> Weight {
        self.total
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn into_record(self) -> PathRecord {
        PathRecord {
            vertices: self.path,
            weight: self.total,
        }
    }
}
