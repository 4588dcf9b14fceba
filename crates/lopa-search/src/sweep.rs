use crate::state::WalkState;
use crate::PathSearch;
use lopa_core::{BudgetClock, Graph, PathRecord, VertexId};
use rayon::prelude::*;
use std::time::Duration;

/// Default wall-clock budget for the deterministic sweep.
pub const SWEEP_TIME_SECS: f64 = 2.5;

/// Deterministic multi-start greedy search.
///
/// Sweeps every vertex as a start and keeps the best walk; sweeps repeat
/// while the previous one improved the best and the time budget holds
/// (the first sweep always runs). With `parallel` set, starts are
/// sharded across threads and merged after each sweep, which can change
/// which of several equal-weight paths wins but not the best weight.
#[derive(Clone, Debug)]
pub struct MultiStartGreedy {
    pub time_limit: Duration,
    pub parallel: bool,
}

impl Default for MultiStartGreedy {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs_f64(SWEEP_TIME_SECS),
            parallel: true,
        }
    }
}

impl MultiStartGreedy {
    pub fn sequential(time_limit: Duration) -> Self {
        Self {
            time_limit,
            parallel: false,
        }
    }

    fn sweep(&self, graph: &Graph) -> Option<PathRecord> {
        let n = graph.vertex_count();
        if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|s| greedy_walk(graph, s))
                .reduce_with(heavier)
        } else {
            (0..n).map(|s| greedy_walk(graph, s)).reduce(heavier)
        }
    }
}

impl PathSearch for MultiStartGreedy {
    fn search(&self, graph: &Graph) -> PathRecord {
        if graph.vertex_count() == 0 {
            return PathRecord::empty();
        }

        let clock = BudgetClock::new(self.time_limit);
        let mut best: Option<PathRecord> = None;
        let mut improved = true;

        while improved && !clock.expired() {
            improved = false;
            if let Some(candidate) = self.sweep(graph) {
                let is_better = best
                    .as_ref()
                    .map_or(true, |b| candidate.weight > b.weight);
                if is_better {
                    tracing::debug!(
                        weight = candidate.weight,
                        len = candidate.len(),
                        "sweep improved best path"
                    );
                    best = Some(candidate);
                    improved = true;
                }
            }
        }

        best.unwrap_or_else(|| PathRecord::singleton(0))
    }
}

fn heavier(a: PathRecord, b: PathRecord) -> PathRecord {
    if b.weight > a.weight {
        b
    } else {
        a
    }
}

/// One greedy walk from `start`: at each step take the strictly heaviest
/// arc to an unvisited vertex, the first arc encountered winning ties;
/// stop when no unvisited neighbor remains.
pub fn greedy_walk(graph: &Graph, start: VertexId) -> PathRecord {
    let mut walk = WalkState::start(graph.vertex_count(), start);

    loop {
        let mut best: Option<&lopa_core::AdjEntry> = None;
        for e in graph.neighbors(walk.current()) {
            if walk.is_visited(e.to) {
                continue;
            }
            if best.map_or(true, |b| e.weight > b.weight) {
                best = Some(e);
            }
        }
        match best {
            Some(arc) => walk.advance(arc),
            None => break,
        }
    }

    walk.into_record()
}
