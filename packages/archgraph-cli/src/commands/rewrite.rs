use std::io::Write;
use std::path::Path;

use anyhow::Result;

use archgraph_core::features::rewrite;

use super::Outcome;
use crate::context::Context;

pub fn exclude_nodes<W: Write>(ctx: &Context, path: &Path, tokens: &[String], out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let ids = ctx.resolve(&graph, tokens);
    let view = rewrite::exclude_nodes(&graph, &ids)?;
    let written = ctx.export(&view, "exclude_nodes")?;
    writeln!(out, "Excluded {} vertices; written to {}", ids.len(), written.display())?;
    Ok(Outcome::Clean)
}

pub fn exclude_subgraphs<W: Write>(
    ctx: &Context,
    path: &Path,
    tokens: &[String],
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let roots = ctx.resolve(&graph, tokens);
    let view = rewrite::exclude_subgraphs(&graph, &roots)?;
    let written = ctx.export(&view, "exclude_subgraphs")?;
    writeln!(
        out,
        "Excluded the subgraphs of {} roots; written to {}",
        roots.len(),
        written.display()
    )?;
    Ok(Outcome::Clean)
}

pub fn group<W: Write>(ctx: &Context, path: &Path, label: &str, tokens: &[String], out: &mut W) -> Result<Outcome> {
    let mut graph = ctx.load_graph(path)?;
    let members = ctx.resolve(&graph, tokens);
    let head = rewrite::group(&mut graph, label, &members)?;
    let written = ctx.export(&graph, "group")?;
    writeln!(
        out,
        "Grouped {} vertices into vtx[{}] '{}'; written to {}",
        members.len(),
        head,
        label,
        written.display()
    )?;
    Ok(Outcome::Clean)
}

pub fn add_parent<W: Write>(
    ctx: &Context,
    path: &Path,
    label: &str,
    tokens: &[String],
    out: &mut W,
) -> Result<Outcome> {
    let mut graph = ctx.load_graph(path)?;
    let members = ctx.resolve(&graph, tokens);
    let parent = rewrite::add_parent(&mut graph, label, &members)?;
    let written = ctx.export(&graph, "add_parent")?;
    writeln!(
        out,
        "Added parent vtx[{}] '{}' over {} vertices; written to {}",
        parent,
        label,
        members.len(),
        written.display()
    )?;
    Ok(Outcome::Clean)
}
