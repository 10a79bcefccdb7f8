//! Parent validation
//!
//! All members of one parent group are expected to form a single island. A
//! group that splits into several islands, or resolved to nothing at all, is
//! a finding. Findings are data; only graph access errors abort.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::islands::{shared_subgraphs_indirect, Island};
use crate::errors::Result;
use crate::shared::models::{GraphAccess, ParentGroup};

/// One inconsistent parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentFinding {
    pub parent_name: String,
    pub islands: Vec<Island>,
}

/// Outcome of validating a set of parent groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Number of groups checked
    pub checked: usize,
    /// Failing parents in input order
    pub findings: Vec<ParentFinding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

fn validate_group<G: GraphAccess>(graph: &G, group: &ParentGroup) -> Result<Option<ParentFinding>> {
    if group.is_empty() {
        warn!("Parent '{}' has no resolved members", group.name);
    }
    let islands = shared_subgraphs_indirect(graph, &group.members)?;
    debug!(
        "Parent '{}' ({} members): {} island(s)",
        group.name,
        group.len(),
        islands.len()
    );
    if islands.len() == 1 {
        return Ok(None);
    }
    Ok(Some(ParentFinding {
        parent_name: group.name.clone(),
        islands,
    }))
}

/// Validate every group; parallel over groups when `parallel` is set.
///
/// Each group only reads the graph and produces its own entry, so the
/// parallel and sequential runs return identical reports.
pub fn validate_parents<G: GraphAccess + Sync>(
    graph: &G,
    groups: &[ParentGroup],
    parallel: bool,
) -> Result<ValidationReport> {
    let outcomes: Vec<Option<ParentFinding>> = if parallel {
        validate_all_parallel(graph, groups)?
    } else {
        groups
            .iter()
            .map(|g| validate_group(graph, g))
            .collect::<Result<_>>()?
    };

    let findings: Vec<ParentFinding> = outcomes.into_iter().flatten().collect();
    info!(
        "Validated {} parents: {} inconsistent",
        groups.len(),
        findings.len()
    );
    Ok(ValidationReport {
        checked: groups.len(),
        findings,
    })
}

#[cfg(feature = "parallel")]
fn validate_all_parallel<G: GraphAccess + Sync>(
    graph: &G,
    groups: &[ParentGroup],
) -> Result<Vec<Option<ParentFinding>>> {
    groups
        .par_iter()
        .map(|g| validate_group(graph, g))
        .collect::<Result<_>>()
}

#[cfg(not(feature = "parallel"))]
fn validate_all_parallel<G: GraphAccess + Sync>(
    graph: &G,
    groups: &[ParentGroup],
) -> Result<Vec<Option<ParentFinding>>> {
    groups.iter().map(|g| validate_group(graph, g)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use crate::shared::models::VertexId;
    use pretty_assertions::assert_eq;

    fn group(name: &str, raw: &[u32]) -> ParentGroup {
        ParentGroup::new(name, raw.iter().copied().map(VertexId))
    }

    fn groups() -> Vec<ParentGroup> {
        vec![
            group("connected", &[3, 4]),
            group("split", &[7, 10, 8]),
            group("empty", &[]),
            group("single", &[2]),
        ]
    }

    #[test]
    fn test_findings_in_input_order() {
        let graph = fixtures::twelve();
        let report = validate_parents(&graph, &groups(), false).unwrap();

        assert_eq!(report.checked, 4);
        let names: Vec<&str> = report.findings.iter().map(|f| f.parent_name.as_str()).collect();
        assert_eq!(names, vec!["split", "empty"]);
        assert_eq!(report.findings[0].islands.len(), 2);
        assert!(report.findings[1].islands.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = fixtures::twelve();
        let sequential = validate_parents(&graph, &groups(), false).unwrap();
        let parallel = validate_parents(&graph, &groups(), true).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_clean_report() {
        let graph = fixtures::twelve();
        let report = validate_parents(&graph, &[group("all", &[1, 2, 3])], true).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_removed_member_is_an_error() {
        let graph = fixtures::twelve();
        assert!(validate_parents(&graph, &[group("gone", &[42])], false).is_err());
    }
}
