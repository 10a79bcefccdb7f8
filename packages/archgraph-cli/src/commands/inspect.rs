use std::io::Write;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::info;

use archgraph_core::features::analysis::find_hotspots;
use archgraph_core::features::matcher::find_matching_vertices;
use archgraph_core::features::partition::{count_components, find_subgraph_roots, independent_subgraph_roots, largest_component};
use archgraph_core::features::report::write_search_results;
use archgraph_core::features::subgraph::{format_vertex, list_shared_sub_vertices, print_all_vertices, print_vertex_children};
use archgraph_core::shared::models::Direction;
use archgraph_core::{Graph, GraphAccess, RenderSelection, Renderer, VertexId};
use archgraph_storage::DotRenderer;

use super::{write_raw, Outcome};
use crate::context::Context;

fn write_vertices<W: Write>(ctx: &Context, graph: &Graph, ids: &[VertexId], out: &mut W) -> Result<()> {
    if ctx.raw {
        return write_raw(out, ids);
    }
    for &v in ids {
        writeln!(out, "{}", format_vertex(graph, v)?)?;
    }
    Ok(())
}

pub fn print_vertex<W: Write>(ctx: &Context, path: &Path, token: &str, out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let v = ctx.resolve_one(&graph, token)?;
    write_vertices(ctx, &graph, &[v], out)?;
    Ok(Outcome::Clean)
}

pub fn print_children<W: Write>(
    ctx: &Context,
    path: &Path,
    token: &str,
    depth: Option<usize>,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let v = ctx.resolve_one(&graph, token)?;
    print_vertex_children(&graph, v, depth.unwrap_or(ctx.config.children_depth), out)?;
    Ok(Outcome::Clean)
}

pub fn print_all<W: Write>(ctx: &Context, path: &Path, out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    if ctx.raw {
        let ids: Vec<VertexId> = graph.vertices().collect();
        write_raw(out, &ids)?;
    } else {
        print_all_vertices(&graph, out)?;
    }
    Ok(Outcome::Clean)
}

pub fn search<W: Write>(ctx: &Context, path: &Path, patterns: &[String], out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    for pattern in patterns {
        let hits = find_matching_vertices(&graph, pattern, &ctx.syntax).unwrap_or_default();
        write_search_results(&graph, pattern, &hits, ctx.raw, out)?;
    }
    Ok(Outcome::Clean)
}

pub fn hotspots<W: Write>(
    ctx: &Context,
    path: &Path,
    incoming: bool,
    top: Option<usize>,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let direction = if incoming {
        Direction::Incoming
    } else {
        Direction::Outgoing
    };
    let ranked = find_hotspots(&graph, direction, top.or(ctx.config.hotspot_count));
    let ids: Vec<VertexId> = ranked.into_iter().map(|(v, _)| v).collect();
    write_vertices(ctx, &graph, &ids, out)?;
    Ok(Outcome::Clean)
}

pub fn shared<W: Write>(ctx: &Context, path: &Path, a: &str, b: &str, out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let a = ctx.resolve_one(&graph, a)?;
    let b = ctx.resolve_one(&graph, b)?;
    let shared = list_shared_sub_vertices(&graph, a, b)?;
    if !ctx.raw {
        writeln!(out, "{} shared vertices below vtx[{}] and vtx[{}]:", shared.len(), a, b)?;
    }
    write_vertices(ctx, &graph, &shared, out)?;
    Ok(Outcome::Clean)
}

/// Root plus its direct children, root highlighted
fn star_selection(graph: &Graph, name: String, root: VertexId) -> Result<RenderSelection> {
    let mut selection = RenderSelection::new(name);
    selection.add_vertex(root.to_string(), graph.label(root)?);
    selection.highlight(&root.to_string());
    for child in graph.out_neighbors(root) {
        selection.add_vertex(child.to_string(), graph.label(child)?);
        selection.add_edge(root.to_string(), child.to_string());
    }
    Ok(selection)
}

pub fn subgraphs<W: Write>(
    ctx: &Context,
    path: &Path,
    independent: bool,
    render_dir: Option<&Path>,
    range: Option<Range<usize>>,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let roots = if independent {
        independent_subgraph_roots(&graph)?
    } else {
        find_subgraph_roots(&graph)
    };

    if !ctx.raw {
        writeln!(out, "Found {} subgraph roots:", roots.len())?;
    }
    write_vertices(ctx, &graph, &roots, out)?;

    if let Some(dir) = render_dir {
        let range = range.unwrap_or(0..roots.len());
        let renderer = DotRenderer;
        let mut written = 0;
        for (i, &root) in roots.iter().enumerate().take(range.end).skip(range.start) {
            let selection = star_selection(&graph, format!("sub{}", i), root)?;
            renderer
                .render(&selection, dir)
                .with_context(|| format!("failed to render subgraph of vtx[{}]", root))?;
            written += 1;
        }
        info!("Rendered {} subgraphs into {}", written, dir.display());
    }
    Ok(Outcome::Clean)
}

pub fn components<W: Write>(ctx: &Context, path: &Path, largest: bool, out: &mut W) -> Result<Outcome> {
    let graph = ctx.load_graph(path)?;
    let count = count_components(&graph);
    writeln!(out, "{} connected components", count)?;

    if largest {
        if let Some(biggest) = largest_component(&graph) {
            let path = ctx.export(&biggest, "components")?;
            writeln!(out, "Largest component ({} vertices) written to {}", biggest.vertex_count(), path.display())?;
        }
    }
    Ok(Outcome::Clean)
}
