//! Subcommand implementations
//!
//! Every command writes its user-facing output to `out`; diagnostics go
//! through `tracing`.

use std::io::Write;

use anyhow::Result;

use archgraph_core::VertexId;

use crate::cli::{Cli, Commands};
use crate::context::Context;

mod analysis;
mod architecture;
mod inspect;
mod rewrite;

/// Whether a command reported findings that should change the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Findings,
}

/// Space-separated handles on one line; nothing for an empty list
pub(crate) fn write_raw<W: Write>(out: &mut W, ids: &[VertexId]) -> Result<()> {
    if !ids.is_empty() {
        let text: Vec<String> = ids.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", text.join(" "))?;
    }
    Ok(())
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<Outcome> {
    let ctx = Context::new(cli.config.as_deref(), cli.raw, cli.out)?;

    match cli.command {
        Commands::PrintVertex { graph, vertex } => inspect::print_vertex(&ctx, &graph.graph, &vertex, out),
        Commands::PrintChildren { graph, vertex, depth } => {
            inspect::print_children(&ctx, &graph.graph, &vertex, depth, out)
        }
        Commands::PrintAll { graph } => inspect::print_all(&ctx, &graph.graph, out),
        Commands::Search { graph, patterns } => inspect::search(&ctx, &graph.graph, &patterns, out),
        Commands::Hotspots { graph, incoming, top } => inspect::hotspots(&ctx, &graph.graph, incoming, top, out),
        Commands::Shared { graph, a, b } => inspect::shared(&ctx, &graph.graph, &a, &b, out),
        Commands::Subgraphs {
            graph,
            independent,
            render_dir,
            range,
        } => inspect::subgraphs(&ctx, &graph.graph, independent, render_dir.as_deref(), range, out),
        Commands::Components { graph, largest } => inspect::components(&ctx, &graph.graph, largest, out),

        Commands::Cycles { graph } => analysis::cycles(&ctx, &graph.graph, out),
        Commands::Depends { graph, reverse, top } => analysis::depends(&ctx, &graph.graph, reverse, top, out),
        Commands::Connected {
            graph,
            tokens,
            fail_on_findings,
        } => analysis::connected(&ctx, &graph.graph, &tokens, fail_on_findings, out),

        Commands::ExcludeNodes { graph, tokens } => rewrite::exclude_nodes(&ctx, &graph.graph, &tokens, out),
        Commands::ExcludeSubgraphs { graph, tokens } => {
            rewrite::exclude_subgraphs(&ctx, &graph.graph, &tokens, out)
        }
        Commands::Group { graph, label, tokens } => rewrite::group(&ctx, &graph.graph, &label, &tokens, out),
        Commands::AddParent { graph, label, tokens } => {
            rewrite::add_parent(&ctx, &graph.graph, &label, &tokens, out)
        }

        Commands::ValidateParents {
            args,
            report,
            fail_on_findings,
        } => architecture::validate_parents(&ctx, &args, report.as_deref(), fail_on_findings, out),
        Commands::CreateParents { args, hierarchy } => architecture::create_parents(&ctx, &args, hierarchy, out),
        Commands::Collisions { args, csv_dir } => architecture::collisions(&ctx, &args, csv_dir.as_deref(), out),
        Commands::Coherence { graph, names } => architecture::coherence(&ctx, &graph.graph, &names, out),
        Commands::Layers {
            graph,
            render_dir,
            names,
        } => architecture::layers(&ctx, &graph.graph, &render_dir, &names, out),
        Commands::Spec {
            spec,
            domain,
            context,
            layer,
            all,
        } => architecture::spec(&ctx, &spec, domain, context, layer, all, out),
    }
}
