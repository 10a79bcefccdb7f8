use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::info;

use archgraph_core::features::hierarchy::{
    build_hierarchy, coherence_report, component_vertices, create_parents as add_component_parents,
    export_layers, find_umbrella, resolve_components, write_coherence_report,
};
use archgraph_core::features::matcher::find_collisions;
use archgraph_core::features::overlap::validate_parents as validate_groups;
use archgraph_core::features::report::{
    collision_matrix, shared_descendant_matrix, write_collision_keys, write_validation_file,
    write_validation_report, CategoryMatrix,
};
use archgraph_core::features::spec_loader::{Category, NameConverter};
use archgraph_core::{init_thread_pool, Graph};
use archgraph_storage::DotRenderer;

use super::Outcome;
use crate::cli::{ArchitectureArgs, NameArgs};
use crate::context::Context;

pub fn validate_parents<W: Write>(
    ctx: &Context,
    args: &ArchitectureArgs,
    report_path: Option<&Path>,
    fail_on_findings: bool,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(&args.graph)?;
    let spec = ctx.load_spec(&args.spec)?;

    if ctx.config.parallel_validation {
        init_thread_pool(ctx.config.threads);
    }
    let groups = resolve_components(&graph, &spec, &ctx.syntax);
    let report = validate_groups(&graph, &groups, ctx.config.parallel_validation)?;
    write_validation_report(&report, out)?;

    if let Some(path) = report_path {
        let mut file = create_file(path)?;
        write_validation_file(&report, &mut file)?;
        file.flush()?;
        info!("Wrote validation findings to {}", path.display());
    }

    if fail_on_findings && !report.is_clean() {
        return Ok(Outcome::Findings);
    }
    Ok(Outcome::Clean)
}

pub fn create_parents<W: Write>(
    ctx: &Context,
    args: &ArchitectureArgs,
    hierarchy: bool,
    out: &mut W,
) -> Result<Outcome> {
    let mut graph = ctx.load_graph(&args.graph)?;
    let spec = ctx.load_spec(&args.spec)?;

    let keys = find_collisions(&resolve_components(&graph, &spec, &ctx.syntax));
    write_collision_keys(&keys, out)?;

    let created = if hierarchy {
        build_hierarchy(&mut graph, &spec, &ctx.syntax, &ctx.config.umbrella_labels)?
            .components
            .len()
    } else {
        add_component_parents(&mut graph, &spec, &ctx.syntax)?.len()
    };

    let written = ctx.export(&graph, "create_parents")?;
    writeln!(out, "Created {} component parents; written to {}", created, written.display())?;
    Ok(Outcome::Clean)
}

pub fn collisions<W: Write>(
    ctx: &Context,
    args: &ArchitectureArgs,
    csv_dir: Option<&Path>,
    out: &mut W,
) -> Result<Outcome> {
    let graph = ctx.load_graph(&args.graph)?;
    let spec = ctx.load_spec(&args.spec)?;
    let groups = resolve_components(&graph, &spec, &ctx.syntax);

    let keys = find_collisions(&groups);
    if keys.is_empty() {
        writeln!(out, "No collisions found.")?;
    } else {
        write_collision_keys(&keys, out)?;
    }

    for category in Category::ALL {
        let matrices = [
            ("collisions", collision_matrix(&spec, &groups, category)),
            ("shared", shared_descendant_matrix(&graph, &spec, &groups, category)?),
        ];
        for (kind, matrix) in &matrices {
            match csv_dir {
                Some(dir) => {
                    let path = dir.join(format!("{}_{}.csv", kind, category.json_key()));
                    write_matrix_file(matrix, &path)?;
                    writeln!(out, "Wrote {}", path.display())?;
                }
                None => {
                    writeln!(out)?;
                    writeln!(out, "{} by {}:", kind, category)?;
                    matrix.write_csv(out)?;
                }
            }
        }
    }
    Ok(Outcome::Clean)
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_matrix_file(matrix: &CategoryMatrix, path: &Path) -> Result<()> {
    let mut file = create_file(path)?;
    matrix.write_csv(&mut file)?;
    file.flush()?;
    Ok(())
}

/// Relabel the component vertices from search names to original names
fn apply_names(ctx: &Context, graph: &mut Graph, names: &NameArgs) -> Result<()> {
    let (Some(original), Some(search)) = (&names.original, &names.search) else {
        return Ok(());
    };
    let converter = NameConverter::from_specs(&ctx.load_spec(original)?, &ctx.load_spec(search)?)?;
    let umbrella = find_umbrella(&*graph, &ctx.config.umbrella_labels.context_groups)?;
    let components = component_vertices(&*graph, umbrella)?;
    let renamed = converter.rename_vertices(graph, &components)?;
    info!("Renamed {} of {} components", renamed, components.len());
    Ok(())
}

pub fn coherence<W: Write>(ctx: &Context, path: &Path, names: &NameArgs, out: &mut W) -> Result<Outcome> {
    let mut graph = ctx.load_graph(path)?;
    apply_names(ctx, &mut graph, names)?;
    let report = coherence_report(&graph, &ctx.config.umbrella_labels.context_groups)?;
    write_coherence_report(&report, out)?;
    Ok(Outcome::Clean)
}

pub fn layers<W: Write>(
    ctx: &Context,
    path: &Path,
    render_dir: &Path,
    names: &NameArgs,
    out: &mut W,
) -> Result<Outcome> {
    let mut graph = ctx.load_graph(path)?;
    apply_names(ctx, &mut graph, names)?;
    let written = export_layers(&mut graph, &ctx.config.umbrella_labels, &DotRenderer, render_dir)?;
    writeln!(out, "Rendered {} pictures into {}", written.len(), render_dir.display())?;
    Ok(Outcome::Clean)
}

pub fn spec<W: Write>(
    ctx: &Context,
    path: &Path,
    domain: Option<String>,
    context: Option<String>,
    layer: Option<String>,
    all: bool,
    out: &mut W,
) -> Result<Outcome> {
    let spec = ctx.load_spec(path)?;

    let mut queries: Vec<(Category, String)> = Vec::new();
    queries.extend(domain.map(|v| (Category::Domain, v)));
    queries.extend(context.map(|v| (Category::ContextGroup, v)));
    queries.extend(layer.map(|v| (Category::AbstractionLayer, v)));

    if all || queries.is_empty() {
        for name in spec.all_components() {
            writeln!(out, "{}", name)?;
        }
    }
    for (category, value) in &queries {
        let names = spec.search_by(*category, value);
        writeln!(out, "{} components with {} '{}':", names.len(), category, value)?;
        for name in names {
            writeln!(out, "  {}", name)?;
        }
    }
    Ok(Outcome::Clean)
}
