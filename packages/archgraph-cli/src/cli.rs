use std::ops::Range;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "archgraph")]
#[command(about = "Explore architecture dependency graphs and validate them against an architecture JSON", long_about = None)]
pub struct Cli {
    /// YAML analysis config (version: 1)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print whitespace-separated vertex handles instead of text
    #[arg(long, global = true)]
    pub raw: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Export path for commands that write a graph
    #[arg(short, long, global = true, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GraphArg {
    /// Graph file (.dot, .gv or .json)
    pub graph: PathBuf,
}

#[derive(Args)]
pub struct ArchitectureArgs {
    /// Graph file (.dot, .gv or .json)
    pub graph: PathBuf,

    /// Architecture JSON
    pub spec: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one vertex with its degrees
    PrintVertex {
        #[command(flatten)]
        graph: GraphArg,
        /// Index or label
        vertex: String,
    },

    /// Print a vertex and its children as a tree
    PrintChildren {
        #[command(flatten)]
        graph: GraphArg,
        /// Index or label
        vertex: String,
        /// Levels below the vertex (default from config)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Print every vertex
    PrintAll {
        #[command(flatten)]
        graph: GraphArg,
    },

    /// Search vertices by pattern (`a&b;c`)
    Search {
        #[command(flatten)]
        graph: GraphArg,
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Vertices with the most edges
    Hotspots {
        #[command(flatten)]
        graph: GraphArg,
        /// Rank by in-degree instead of out-degree
        #[arg(long = "in")]
        incoming: bool,
        /// Number of vertices (default ceil(log2 n) + 1)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Enumerate elementary circuits
    Cycles {
        #[command(flatten)]
        graph: GraphArg,
    },

    /// Subgraph roots, optionally rendered
    Subgraphs {
        #[command(flatten)]
        graph: GraphArg,
        /// Only roots not nested in another root's subgraph
        #[arg(long)]
        independent: bool,
        /// Render each root with its direct children into this directory
        #[arg(long, value_name = "DIR")]
        render_dir: Option<PathBuf>,
        /// Roots to render, by position (`A..B`)
        #[arg(long, value_parser = parse_range, requires = "render_dir")]
        range: Option<Range<usize>>,
    },

    /// Vertices in the subgraphs of both A and B
    Shared {
        #[command(flatten)]
        graph: GraphArg,
        a: String,
        b: String,
    },

    /// Export the graph without the given vertices
    ExcludeNodes {
        #[command(flatten)]
        graph: GraphArg,
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Export the graph without the subgraphs of the given roots
    ExcludeSubgraphs {
        #[command(flatten)]
        graph: GraphArg,
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Merge vertices into one head vertex and export
    Group {
        #[command(flatten)]
        graph: GraphArg,
        label: String,
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Add a parent vertex over the given vertices and export
    AddParent {
        #[command(flatten)]
        graph: GraphArg,
        label: String,
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Whether the given vertices form one island
    Connected {
        #[command(flatten)]
        graph: GraphArg,
        #[arg(required = true)]
        tokens: Vec<String>,
        /// Exit with status 2 when they are not connected
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// Check that the vertices of every component are connected
    ValidateParents {
        #[command(flatten)]
        args: ArchitectureArgs,
        /// Also write the findings to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
        /// Exit with status 2 when a parent is inconsistent
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// Add one parent vertex per component and export
    CreateParents {
        #[command(flatten)]
        args: ArchitectureArgs,
        /// Also add category vertices and the umbrella vertices
        #[arg(long)]
        hierarchy: bool,
    },

    /// Components whose matches overlap, plus per-category matrices
    Collisions {
        #[command(flatten)]
        args: ArchitectureArgs,
        /// Write collision and shared-descendant matrices as CSV here
        #[arg(long, value_name = "DIR")]
        csv_dir: Option<PathBuf>,
    },

    /// Transitive dependency counts (acyclic graphs only)
    Depends {
        #[command(flatten)]
        graph: GraphArg,
        /// Count dependents instead of dependencies
        #[arg(short, long)]
        reverse: bool,
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Count undirected components; optionally export the largest
    Components {
        #[command(flatten)]
        graph: GraphArg,
        #[arg(long)]
        largest: bool,
    },

    /// Components whose matched vertices are not connected (hierarchy graphs)
    Coherence {
        #[command(flatten)]
        graph: GraphArg,
        #[command(flatten)]
        names: NameArgs,
    },

    /// Render layer and layer-pair dependency pictures (hierarchy graphs)
    Layers {
        #[command(flatten)]
        graph: GraphArg,
        #[arg(long, value_name = "DIR")]
        render_dir: PathBuf,
        #[command(flatten)]
        names: NameArgs,
    },

    /// Query an architecture JSON
    Spec {
        /// Architecture JSON
        spec: PathBuf,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        layer: Option<String>,
        /// List every component
        #[arg(long)]
        all: bool,
    },
}

/// Architecture JSON pair for renaming search names back to original names
#[derive(Args)]
pub struct NameArgs {
    #[arg(long, value_name = "SPEC", requires = "search")]
    pub original: Option<PathBuf>,
    #[arg(long, value_name = "SPEC", requires = "original")]
    pub search: Option<PathBuf>,
}

fn parse_range(text: &str) -> Result<Range<usize>, String> {
    let (start, end) = text
        .split_once("..")
        .ok_or_else(|| format!("expected A..B, got '{}'", text))?;
    let start: usize = start.trim().parse().map_err(|e| format!("bad start: {}", e))?;
    let end: usize = end.trim().parse().map_err(|e| format!("bad end: {}", e))?;
    if start > end {
        return Err(format!("empty range {}..{}", start, end));
    }
    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("2..5"), Ok(2..5));
        assert!(parse_range("5..2").is_err());
        assert!(parse_range("x").is_err());
    }
}
