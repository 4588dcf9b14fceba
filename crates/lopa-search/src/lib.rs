pub mod jump;
pub mod rng;
pub mod state;
pub mod sweep;

use lopa_core::{Graph, PathRecord};

pub use jump::RandomJump;
pub use rng::WalkRng;
pub use state::WalkState;
pub use sweep::MultiStartGreedy;

/// A path-search strategy: explore simple paths in `graph` under the
/// strategy's own time budget and return the best one found.
///
/// The best-known weight only ever increases during a run; comparisons
/// are plain `f64 >` with no epsilon.
pub trait PathSearch {
    fn search(&self, graph: &Graph) -> PathRecord;
}
