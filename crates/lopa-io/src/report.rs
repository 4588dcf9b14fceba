use lopa_core::{Graph, PathRecord};

/// Render the result block: the best weight rounded to the nearest
/// integer, then the path as display names joined by single spaces.
/// Both lines are newline-terminated; an empty path gives an empty
/// second line.
pub fn render(graph: &Graph, best: &PathRecord) -> String {
    let names: Vec<&str> = best.vertices.iter().map(|&v| graph.name(v)).collect();
    format!("{:.0}\n{}\n", best.weight, names.join(" "))
}
