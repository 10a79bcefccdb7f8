use std::io::Write;
use std::path::Path;

use anyhow::Result;

use archgraph_core::features::analysis::{dependency_counts, find_circuits, write_cycle_report, write_dependency_table};
use archgraph_core::features::overlap::check_nodes_connected;

use super::{write_raw, Outcome};
use crate::context::Context;

pub fn cycles<W: Write>(ctx: &Context, path: &Path, out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let report = find_circuits(&graph, ctx.config.max_cycles);
    if ctx.raw {
        for circuit in &report.circuits {
            write_raw(out, circuit)?;
        }
    } else {
        write_cycle_report(&graph, &report, out)?;
    }
    Ok(Outcome::Clean)
}

pub fn depends<W: Write>(
    ctx: &Context,
    path: &Path,
    reverse: bool,
    top: Option<usize>,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let counts = dependency_counts(&graph, reverse, top)?;
    if ctx.raw {
        for entry in &counts {
            writeln!(out, "{} {}", entry.vertex, entry.count)?;
        }
    } else {
        write_dependency_table(&graph, &counts, out)?;
    }
    Ok(Outcome::Clean)
}

pub fn connected<W: Write>(
    ctx: &Context,
    path: &Path,
    tokens: &[String],
    fail_on_findings: bool,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let members = ctx.resolve(&graph, tokens);
    let connected = check_nodes_connected(&graph, &members)?;
    writeln!(out, "{}", if connected { "yes" } else { "no" })?;

    if !connected && fail_on_findings {
        return Ok(Outcome::Findings);
    }
    Ok(Outcome::Clean)
}
