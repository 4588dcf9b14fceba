use crate::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// Best-so-far summary of one search attempt: the vertex sequence and
/// its accumulated weight. Simplicity (no vertex repeated) is upheld by
/// the walk that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

impl PathRecord {
    /// One-vertex path of weight 0, the fallback for isolated starts.
    pub fn singleton(v: VertexId) -> Self {
        Self {
            vertices: vec![v],
            weight: 0.0,
        }
    }

    /// Empty record, used only when a search never ran.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            weight: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
