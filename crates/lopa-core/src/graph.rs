use crate::intern::NameTable;
use crate::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// One arc in an adjacency list: destination and weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjEntry {
    pub to: VertexId,
    pub weight: Weight,
}

/// Immutable weighted undirected graph over interned vertices.
///
/// Every inserted edge is stored as two mirrored directed arcs, so the
/// graph is symmetric by construction. Parallel edges and self-loops are
/// kept as given.
#[derive(Clone, Debug, Serialize)]
pub struct Graph {
    adj: Vec<Vec<AdjEntry>>,
    names: Vec<String>,
    edges: usize,
}

impl Graph {
    /// Number of vertices (dense ids `0..n`).
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges inserted (arcs / 2).
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Arcs out of `v`, in input order: for each input edge the forward
    /// arc precedes its mirror in their respective lists. Greedy ties
    /// resolve to the earliest-appended arc.
    pub fn neighbors(&self, v: VertexId) -> &[AdjEntry] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display name for a vertex id.
    pub fn name(&self, v: VertexId) -> &str {
        &self.names[v]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Recompute the weight of a vertex sequence by summing consecutive
    /// arcs, taking the first matching arc where parallel edges exist.
    /// Returns `None` if a hop has no connecting arc.
    pub fn path_weight(&self, path: &[VertexId]) -> Option<Weight> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let arc = self.neighbors(pair[0]).iter().find(|e| e.to == pair[1])?;
            total += arc.weight;
        }
        Some(total)
    }
}

/// Incremental graph construction from an edge stream.
///
/// Vertex ids are discovered lazily from edge endpoints, so adjacency
/// storage grows past the declared hint when the stream names more
/// vertices than advertised.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: NameTable,
    adj: Vec<Vec<AdjEntry>>,
    edges: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size interner and adjacency from the declared vertex count.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            names: NameTable::with_capacity(hint),
            adj: Vec::with_capacity(hint),
            edges: 0,
        }
    }

    /// Intern a name without attaching any arc.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        let id = self.names.intern(name);
        self.grow_to(id);
        id
    }

    /// Intern both endpoints and append the arc and its mirror.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        let u = self.names.intern(from);
        let v = self.names.intern(to);
        self.grow_to(u.max(v));

        self.adj[u].push(AdjEntry { to: v, weight });
        self.adj[v].push(AdjEntry { to: u, weight });
        self.edges += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Finalize: trim storage to the exact discovered vertex count.
    pub fn finish(mut self) -> Graph {
        debug_assert_eq!(self.adj.len(), self.names.len());
        for list in &mut self.adj {
            list.shrink_to_fit();
        }
        self.adj.shrink_to_fit();
        Graph {
            adj: self.adj,
            names: self.names.into_names(),
            edges: self.edges,
        }
    }

    fn grow_to(&mut self, id: VertexId) {
        if id >= self.adj.len() {
            self.adj.resize_with(id + 1, Vec::new);
        }
    }
}
