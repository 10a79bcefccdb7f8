//! Graphs shared by the unit tests

use crate::shared::models::Graph;

/// Twelve vertices `v00..v11`:
///
/// ```text
/// v00 -> v01, v02        v04 -> v07, v08, v09
/// v01 -> v02, v03, v04   v05 -> v10, v11
/// v02 -> v05             v06 -> v06
/// v03 -> v06, v07        v08 -> v06
/// v10 -> v06             v11 -> v09
/// ```
pub fn twelve() -> Graph {
    let labels: Vec<String> = (0..12).map(|i| format!("v{:02}", i)).collect();
    Graph::from_parts(
        labels,
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 5),
            (3, 6),
            (3, 7),
            (4, 7),
            (4, 8),
            (4, 9),
            (5, 10),
            (5, 11),
            (6, 6),
            (8, 6),
            (10, 6),
            (11, 9),
        ],
    )
    .unwrap()
}

/// Graph with arbitrary labels and `(source, target)` edges
pub fn graph(labels: &[&str], edges: &[(u32, u32)]) -> Graph {
    Graph::from_parts(labels.iter().copied(), edges).unwrap()
}
