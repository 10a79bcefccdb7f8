use std::collections::BTreeSet;

use crate::errors::{ArchGraphError, Result};
use crate::shared::models::VertexId;

/// Labels of the candidate groups sharing at least one vertex with `main`.
///
/// `candidates[i]` is labelled `labels[i]`; the result keeps candidate order.
pub fn shared_subgraphs_direct<L: Clone>(
    main: &BTreeSet<VertexId>,
    candidates: &[BTreeSet<VertexId>],
    labels: &[L],
) -> Result<Vec<L>> {
    if candidates.len() != labels.len() {
        return Err(ArchGraphError::invalid_argument(format!(
            "{} candidate groups but {} labels",
            candidates.len(),
            labels.len()
        )));
    }

    Ok(candidates
        .iter()
        .zip(labels)
        .filter(|(group, _)| group.iter().any(|v| main.contains(v)))
        .map(|(_, label)| label.clone())
        .collect())
}
