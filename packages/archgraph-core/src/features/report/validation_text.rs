//! Plain-text writers for validation, collision and search results

use std::io::Write;

use crate::errors::Result;
use crate::features::overlap::{Island, ValidationReport};
use crate::shared::models::{GraphAccess, VertexId};

/// File written next to the other artifacts by `validate-parents --report`
pub const VALIDATION_FILE_NAME: &str = "parent_handler_validation.txt";

fn join_ids(ids: &[VertexId], separator: &str) -> String {
    ids.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(separator)
}

fn bracketed(island: &Island) -> String {
    format!("[{}]", join_ids(island, ", "))
}

/// Console form: one block per failing parent, islands as `[a, b]`
pub fn write_validation_report<W: Write>(report: &ValidationReport, out: &mut W) -> Result<()> {
    if report.is_clean() {
        writeln!(
            out,
            "Everything is fine. All nodes with the same parent are somewhere connected within their subgraphs"
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "the following nodes and their subgraphs aren't connected even though they share the same parent:"
    )?;
    for finding in &report.findings {
        writeln!(out, "{}:", finding.parent_name)?;
        for island in &finding.islands {
            writeln!(out, "{}", bracketed(island))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// File form: `name:` then one comma-joined line per island
pub fn write_validation_file<W: Write>(report: &ValidationReport, out: &mut W) -> Result<()> {
    for finding in &report.findings {
        writeln!(out, "{}:", finding.parent_name)?;
        for island in &finding.islands {
            writeln!(out, "{}", join_ids(island, ","))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Nothing is written when there are no collisions
pub fn write_collision_keys<W: Write>(keys: &[String], out: &mut W) -> Result<()> {
    if keys.is_empty() {
        return Ok(());
    }
    writeln!(out, "The following keys are part of collisions:")?;
    for key in keys {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}

/// Search hits, human readable or (`raw`) as space-separated handles
pub fn write_search_results<G: GraphAccess, W: Write>(
    graph: &G,
    pattern: &str,
    hits: &[VertexId],
    raw: bool,
    out: &mut W,
) -> Result<()> {
    if raw {
        if !hits.is_empty() {
            writeln!(out, "{}", join_ids(hits, " "))?;
        }
        return Ok(());
    }

    if hits.is_empty() {
        writeln!(out, "No results found for '{}'.", pattern)?;
        return Ok(());
    }
    writeln!(out, "Found {} results for '{}':", hits.len(), pattern)?;
    for &v in hits {
        writeln!(out, "vtx[{}] {}", v, graph.label(v)?)?;
    }
    Ok(())
}
