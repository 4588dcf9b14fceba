use crate::rng::WalkRng;
use crate::state::WalkState;
use crate::PathSearch;
use lopa_core::{AdjEntry, BudgetClock, Graph, PathRecord, VertexId};
use std::time::Duration;

/// Probability of an exploration jump at each step.
pub const JUMP_PROB: f64 = 0.15;

/// Default stagnation budget in seconds.
pub const STAGNATION_SECS: f64 = 60.0;

/// Randomized greedy search with exploration jumps.
///
/// Each attempt starts from a uniformly random vertex and walks until
/// stuck: per step, with probability `jump_prob` (and at least two
/// unvisited neighbors) the next arc is drawn uniformly from all
/// unvisited neighbors, otherwise uniformly from those tied for the
/// maximum weight. The search runs until `stagnation` elapses without a
/// strict improvement; the window restarts on every improvement, so the
/// total runtime is open-ended but bounded per dry spell.
#[derive(Clone, Debug)]
pub struct RandomJump {
    pub stagnation: Duration,
    pub jump_prob: f64,
    /// `None` seeds from OS entropy. A fixed seed pins the walk
    /// sequence; combined with `max_attempts` the whole run is
    /// reproducible.
    pub seed: Option<u64>,
    /// Upper bound on walk attempts, `None` for time-governed only.
    pub max_attempts: Option<usize>,
}

impl Default for RandomJump {
    fn default() -> Self {
        Self {
            stagnation: Duration::from_secs_f64(STAGNATION_SECS),
            jump_prob: JUMP_PROB,
            seed: None,
            max_attempts: None,
        }
    }
}

impl RandomJump {
    pub fn seeded(stagnation: Duration, seed: u64) -> Self {
        Self {
            stagnation,
            jump_prob: JUMP_PROB,
            seed: Some(seed),
            max_attempts: None,
        }
    }

    fn walk(&self, graph: &Graph, start: VertexId, rng: &mut WalkRng) -> PathRecord {
        let mut walk = WalkState::start(graph.vertex_count(), start);

        loop {
            let unvisited: Vec<&AdjEntry> = graph
                .neighbors(walk.current())
                .iter()
                .filter(|e| !walk.is_visited(e.to))
                .collect();
            if unvisited.is_empty() {
                break;
            }

            let arc = if unvisited.len() >= 2 && rng.chance(self.jump_prob) {
                // Exploration jump: any unvisited neighbor.
                *rng.pick(&unvisited)
            } else {
                // Greedy: uniform among arcs tied for maximum weight.
                let max_w = unvisited
                    .iter()
                    .map(|e| e.weight)
                    .fold(f64::NEG_INFINITY, f64::max);
                let best: Vec<&AdjEntry> = unvisited
                    .iter()
                    .copied()
                    .filter(|e| e.weight == max_w)
                    .collect();
                *rng.pick(&best)
            };
            walk.advance(arc);
        }

        walk.into_record()
    }
}

impl PathSearch for RandomJump {
    fn search(&self, graph: &Graph) -> PathRecord {
        let n = graph.vertex_count();
        if n == 0 {
            return PathRecord::empty();
        }

        let mut rng = match self.seed {
            Some(seed) => WalkRng::seeded(seed),
            None => WalkRng::from_entropy(),
        };
        let mut clock = BudgetClock::new(self.stagnation);
        let mut best: Option<PathRecord> = None;
        let mut attempts = 0usize;

        while !clock.expired() {
            if self.max_attempts.is_some_and(|cap| attempts >= cap) {
                break;
            }
            attempts += 1;
            let start = rng.vertex(n);
            let candidate = self.walk(graph, start, &mut rng);
            let is_better = best
                .as_ref()
                .map_or(true, |b| candidate.weight > b.weight);
            if is_better {
                tracing::debug!(
                    weight = candidate.weight,
                    len = candidate.len(),
                    elapsed_ms = clock.elapsed().as_millis() as u64,
                    "random walk improved best path"
                );
                best = Some(candidate);
                clock.reset();
            }
        }

        best.unwrap_or_else(|| PathRecord::singleton(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopa_core::GraphBuilder;

    fn build(edges: &[(&str, &str, f64)]) -> Graph {
        let mut b = GraphBuilder::new();
        for &(u, v, w) in edges {
            b.add_edge(u, v, w);
        }
        b.finish()
    }

    fn short(seed: u64) -> RandomJump {
        RandomJump::seeded(Duration::from_millis(50), seed)
    }

    #[test]
    fn finds_the_chain() {
        let g = build(&[("A", "B", 1.0), ("B", "C", 2.0)]);
        let best = short(42).search(&g);
        assert_eq!(best.weight, 3.0);
        assert!(best.vertices == vec![0, 1, 2] || best.vertices == vec![2, 1, 0]);
    }

    #[test]
    fn zero_jump_prob_is_pure_greedy_descent() {
        // With jump_prob = 0 and no weight ties, every walk is the
        // deterministic greedy walk from its start.
        let g = build(&[("A", "B", 1.0), ("B", "C", 2.0), ("B", "D", 3.0)]);
        let strategy = RandomJump {
            stagnation: Duration::from_millis(50),
            jump_prob: 0.0,
            seed: Some(9),
            ..RandomJump::default()
        };
        let mut rng = WalkRng::seeded(9);
        for start in 0..g.vertex_count() {
            let rec = strategy.walk(&g, start, &mut rng);
            assert_eq!(rec, crate::sweep::greedy_walk(&g, start));
        }
    }

    #[test]
    fn greedy_step_prefers_the_heavier_parallel_edge() {
        let g = build(&[("A", "B", 1.0), ("A", "B", 5.0)]);
        let strategy = RandomJump {
            stagnation: Duration::from_millis(50),
            jump_prob: 0.0,
            seed: Some(1),
            ..RandomJump::default()
        };
        let mut rng = WalkRng::seeded(1);
        let rec = strategy.walk(&g, 0, &mut rng);
        assert_eq!(rec.vertices, vec![0, 1]);
        assert_eq!(rec.weight, 5.0);
    }

    #[test]
    fn ties_are_broken_uniformly_among_best_arcs() {
        // B and C tie for max weight out of A; over many walks both must
        // be taken, and D (lighter) never on the first step.
        let g = build(&[("A", "B", 2.0), ("A", "C", 2.0), ("A", "D", 1.0)]);
        let strategy = RandomJump {
            stagnation: Duration::from_millis(50),
            jump_prob: 0.0,
            seed: Some(5),
            ..RandomJump::default()
        };
        let mut rng = WalkRng::seeded(5);
        let mut first_hop = [0usize; 4];
        for _ in 0..200 {
            let rec = strategy.walk(&g, 0, &mut rng);
            first_hop[rec.vertices[1]] += 1;
        }
        assert!(first_hop[1] > 0); // B
        assert!(first_hop[2] > 0); // C
        assert_eq!(first_hop[3], 0); // D never tied for max
    }

    #[test]
    fn jumps_reach_arcs_greedy_never_takes() {
        // With jumps enabled the light A->D arc is taken eventually.
        let g = build(&[("A", "B", 2.0), ("A", "C", 2.0), ("A", "D", 1.0)]);
        let strategy = RandomJump {
            stagnation: Duration::from_millis(50),
            jump_prob: 0.5,
            seed: Some(11),
            ..RandomJump::default()
        };
        let mut rng = WalkRng::seeded(11);
        let mut hit_d_first = false;
        for _ in 0..300 {
            let rec = strategy.walk(&g, 0, &mut rng);
            if rec.vertices[1] == 3 {
                hit_d_first = true;
                break;
            }
        }
        assert!(hit_d_first);
    }

    #[test]
    fn single_unvisited_neighbor_never_jumps() {
        // One unvisited neighbor per step: jump_prob = 1.0 must still
        // follow the only arc available (the jump branch needs >= 2).
        let g = build(&[("A", "B", 1.0), ("B", "C", 2.0)]);
        let strategy = RandomJump {
            stagnation: Duration::from_millis(50),
            jump_prob: 1.0,
            seed: Some(2),
            ..RandomJump::default()
        };
        let mut rng = WalkRng::seeded(2);
        let rec = strategy.walk(&g, 0, &mut rng);
        assert_eq!(rec.vertices, vec![0, 1, 2]);
        assert_eq!(rec.weight, 3.0);
    }

    #[test]
    fn isolated_vertex_reports_weight_zero() {
        let mut b = GraphBuilder::new();
        b.add_vertex("X");
        let g = b.finish();
        let best = short(4).search(&g);
        assert_eq!(best.vertices, vec![0]);
        assert_eq!(best.weight, 0.0);
    }

    #[test]
    fn walks_stay_simple() {
        let g = build(&[
            ("a", "b", 1.0),
            ("b", "c", 4.0),
            ("c", "a", 2.0),
            ("c", "d", 3.0),
            ("d", "b", 5.0),
        ]);
        let strategy = RandomJump {
            stagnation: Duration::from_millis(50),
            jump_prob: 0.3,
            seed: Some(21),
            ..RandomJump::default()
        };
        let mut rng = WalkRng::seeded(21);
        for _ in 0..200 {
            let start = rng.vertex(g.vertex_count());
            let rec = strategy.walk(&g, start, &mut rng);
            let mut seen = std::collections::HashSet::new();
            assert!(rec.vertices.iter().all(|v| seen.insert(*v)));
            assert_eq!(g.path_weight(&rec.vertices), Some(rec.weight));
        }
    }
}
