//! Architecture specification loading
//!
//! Two JSON layouts are accepted:
//!
//! - nested: `{contextGroup: [{hwLevel: [{domainGroup: [{component: attrs}]}]}]}`
//!   (four levels of object/list nesting above the component entries)
//! - flat: `[{component: attrs}, ...]`
//!
//! Both flatten to an ordered list of [`ComponentRecord`]s. A name that
//! appears twice keeps its first position and takes the later attributes.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::domain::{Category, ComponentAttributes, ComponentRecord};
use crate::errors::{ArchGraphError, Result};

/// Flattened architecture specification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchitectureSpec {
    records: Vec<ComponentRecord>,
}

impl ArchitectureSpec {
    pub fn from_records(records: impl IntoIterator<Item = ComponentRecord>) -> Self {
        let mut spec = Self::default();
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();
        for record in records {
            spec.insert(&mut positions, record);
        }
        spec
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let spec = Self::from_json_str(&text)?;
        debug!("Loaded {} components from {}", spec.len(), path.display());
        Ok(spec)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let mut entries: Vec<(String, &Value)> = Vec::new();
        match value {
            Value::Array(items) => collect_flat(items, &mut entries)?,
            Value::Object(map) => collect_nested(map, &mut entries)?,
            _ => {
                return Err(ArchGraphError::spec(
                    "architecture specification must be a JSON object or list",
                ))
            }
        }

        let mut records = Vec::with_capacity(entries.len());
        for (name, attrs) in entries {
            let attributes: ComponentAttributes = serde_json::from_value(attrs.clone())
                .map_err(|e| ArchGraphError::spec(format!("component '{}': {}", name, e)))?;
            records.push(ComponentRecord::new(name, attributes));
        }
        Ok(Self::from_records(records))
    }

    fn insert(&mut self, positions: &mut FxHashMap<String, usize>, record: ComponentRecord) {
        if let Some(&at) = positions.get(&record.name) {
            warn!("Component '{}' is specified more than once", record.name);
            self.records[at].attributes = record.attributes;
            return;
        }
        positions.insert(record.name.clone(), self.records.len());
        self.records.push(record);
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every component name in specification order
    pub fn all_components(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn search_by(&self, category: Category, value: &str) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.category(category) == Some(value))
            .map(|r| r.name.as_str())
            .collect()
    }

    pub fn search_by_domain(&self, domain: &str) -> Vec<&str> {
        self.search_by(Category::Domain, domain)
    }

    pub fn search_by_context(&self, context_group: &str) -> Vec<&str> {
        self.search_by(Category::ContextGroup, context_group)
    }

    pub fn search_by_abstraction(&self, abstraction_layer: &str) -> Vec<&str> {
        self.search_by(Category::AbstractionLayer, abstraction_layer)
    }

    /// Distinct values of `category` in first-appearance order; unset values are skipped
    pub fn category_values(&self, category: Category) -> Vec<&str> {
        let mut values: Vec<&str> = Vec::new();
        for value in self.records.iter().filter_map(|r| r.category(category)) {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}

fn expect_object<'v>(value: &'v Value, level: &str) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ArchGraphError::spec(format!("expected an object at {}", level)))
}

fn expect_array<'v>(value: &'v Value, level: &str) -> Result<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ArchGraphError::spec(format!("expected a list at {}", level)))
}

fn collect_nested<'v>(root: &'v Map<String, Value>, out: &mut Vec<(String, &'v Value)>) -> Result<()> {
    for (context, levels) in root {
        for level in expect_array(levels, context)? {
            for (group, categories) in expect_object(level, context)? {
                for category in expect_array(categories, group)? {
                    for (domain_group, components) in expect_object(category, group)? {
                        for entry in expect_array(components, domain_group)? {
                            for (name, attrs) in expect_object(entry, domain_group)? {
                                out.push((name.clone(), attrs));
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn collect_flat<'v>(items: &'v [Value], out: &mut Vec<(String, &'v Value)>) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        for (name, attrs) in expect_object(item, &format!("list entry {}", i))? {
            out.push((name.clone(), attrs));
        }
    }
    Ok(())
}
