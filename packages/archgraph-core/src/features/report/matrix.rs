//! Category x category matrices
//!
//! One row and one column per value of a [`Category`] (in specification
//! order). Off-diagonal cells are symmetric counts; the diagonal is `-1`.

use std::collections::BTreeSet;
use std::io::Write;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::Result;
use crate::features::spec_loader::{ArchitectureSpec, Category};
use crate::features::subgraph::collect_subgraph;
use crate::shared::models::{GraphAccess, ParentGroup, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatrix {
    pub category: Category,
    pub labels: Vec<String>,
    pub cells: Vec<Vec<i64>>,
}

impl CategoryMatrix {
    fn with_labels(category: Category, labels: Vec<String>) -> Self {
        let n = labels.len();
        let mut cells = vec![vec![0; n]; n];
        for (i, row) in cells.iter_mut().enumerate() {
            row[i] = -1;
        }
        Self {
            category,
            labels,
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Cell by row and column label
    pub fn get(&self, row: &str, column: &str) -> Option<i64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == column)?;
        Some(self.cells[i][j])
    }

    /// Header row of labels, then one row per label
    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut header = vec![csv_field(self.category.json_key())];
        header.extend(self.labels.iter().map(|l| csv_field(l)));
        writeln!(out, "{}", header.join(","))?;

        for (label, row) in self.labels.iter().zip(&self.cells) {
            let mut fields = vec![csv_field(label)];
            fields.extend(row.iter().map(|c| c.to_string()));
            writeln!(out, "{}", fields.join(","))?;
        }
        Ok(())
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Resolved groups per category value; unresolved components are left out
fn groups_by_value<'a>(
    spec: &'a ArchitectureSpec,
    groups: &'a [ParentGroup],
    category: Category,
) -> Vec<(&'a str, Vec<&'a ParentGroup>)> {
    let by_name: FxHashMap<&str, &ParentGroup> = groups.iter().map(|g| (g.name.as_str(), g)).collect();
    spec.category_values(category)
        .into_iter()
        .map(|value| {
            let members = spec
                .search_by(category, value)
                .into_iter()
                .filter_map(|name| by_name.get(name).copied())
                .collect();
            (value, members)
        })
        .collect()
}

fn intersects(a: &ParentGroup, b: &ParentGroup) -> bool {
    a.members.iter().any(|m| b.members.contains(m))
}

/// Number of colliding component pairs between every two values of `category`
pub fn collision_matrix(spec: &ArchitectureSpec, groups: &[ParentGroup], category: Category) -> CategoryMatrix {
    let values = groups_by_value(spec, groups, category);
    let mut matrix = CategoryMatrix::with_labels(category, values.iter().map(|(v, _)| v.to_string()).collect());

    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            let mut count = 0;
            for a in &values[i].1 {
                for b in &values[j].1 {
                    if a.name != b.name && intersects(a, b) {
                        count += 1;
                    }
                }
            }
            matrix.cells[i][j] = count;
            matrix.cells[j][i] = count;
        }
    }
    matrix
}

/// Number of vertices reachable from both members sets of every two values.
///
/// A value's reach is the union of the collected subgraphs of all its
/// components' members.
pub fn shared_descendant_matrix<G: GraphAccess>(
    graph: &G,
    spec: &ArchitectureSpec,
    groups: &[ParentGroup],
    category: Category,
) -> Result<CategoryMatrix> {
    let values = groups_by_value(spec, groups, category);

    let mut reach: Vec<BTreeSet<VertexId>> = Vec::with_capacity(values.len());
    for (_, components) in &values {
        let mut seen = BTreeSet::new();
        for group in components {
            for &m in &group.members {
                if !seen.contains(&m) {
                    seen.extend(collect_subgraph(graph, m)?);
                }
            }
        }
        reach.push(seen);
    }

    let mut matrix = CategoryMatrix::with_labels(category, values.iter().map(|(v, _)| v.to_string()).collect());
    for i in 0..reach.len() {
        for j in (i + 1)..reach.len() {
            let shared = reach[i].intersection(&reach[j]).count() as i64;
            matrix.cells[i][j] = shared;
            matrix.cells[j][i] = shared;
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use crate::features::hierarchy::resolve_components;
    use crate::features::matcher::PatternSyntax;
    use pretty_assertions::assert_eq;

    const SPEC: &str = r#"[
      {"v03": {"domain": "d1", "contextGroup": "C1", "abstractionLayer": "L1"}},
      {"v04": {"domain": "d2", "contextGroup": "C1", "abstractionLayer": "L2"}},
      {"v04;v07": {"domain": "d2", "contextGroup": "C2", "abstractionLayer": "L1"}},
      {"v07": {"domain": "d1", "contextGroup": "C2", "abstractionLayer": "L2"}}
    ]"#;

    fn setup() -> (crate::shared::models::Graph, ArchitectureSpec, Vec<ParentGroup>) {
        let graph = fixtures::twelve();
        let spec = ArchitectureSpec::from_json_str(SPEC).unwrap();
        let groups = resolve_components(&graph, &spec, &PatternSyntax::default());
        (graph, spec, groups)
    }

    #[test]
    fn test_collision_matrix() {
        let (_, spec, groups) = setup();

        let contexts = collision_matrix(&spec, &groups, Category::ContextGroup);
        assert_eq!(contexts.labels, vec!["C1", "C2"]);
        assert_eq!(contexts.cells, vec![vec![-1, 1], vec![1, -1]]);

        let domains = collision_matrix(&spec, &groups, Category::Domain);
        assert_eq!(domains.get("d1", "d2"), Some(1));

        // v04;v07 collides with both L2 components
        let layers = collision_matrix(&spec, &groups, Category::AbstractionLayer);
        assert_eq!(layers.get("L2", "L1"), Some(2));
    }

    #[test]
    fn test_shared_descendant_matrix() {
        let (graph, spec, groups) = setup();

        let contexts = shared_descendant_matrix(&graph, &spec, &groups, Category::ContextGroup).unwrap();
        // {3,4,6,7,8,9} and {4,6,7,8,9}
        assert_eq!(contexts.get("C1", "C2"), Some(5));
        assert_eq!(contexts.get("C1", "C1"), Some(-1));

        let domains = shared_descendant_matrix(&graph, &spec, &groups, Category::Domain).unwrap();
        assert_eq!(domains.get("d1", "d2"), Some(2));
    }

    #[test]
    fn test_write_csv_quotes_labels() {
        let mut matrix = CategoryMatrix::with_labels(Category::Domain, vec!["a,b".into(), "c".into()]);
        matrix.cells[0][1] = 3;
        matrix.cells[1][0] = 3;

        let mut out = Vec::new();
        matrix.write_csv(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "domain,\"a,b\",c\n\"a,b\",-1,3\nc,3,-1\n"
        );
    }

    #[test]
    fn test_empty_spec_gives_empty_matrix() {
        let spec = ArchitectureSpec::from_records(Vec::new());
        let matrix = collision_matrix(&spec, &[], Category::Domain);
        assert!(matrix.is_empty());
    }
}
