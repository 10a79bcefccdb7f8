use serde::{Deserialize, Serialize};

use super::ids::VertexId;

/// Vertices resolved from one named architecture entry.
///
/// `members` is an ordered set: first-appearance order, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentGroup {
    pub name: String,
    pub members: Vec<VertexId>,
}

impl ParentGroup {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = VertexId>) -> Self {
        let mut group = Self {
            name: name.into(),
            members: Vec::new(),
        };
        group.extend(members);
        group
    }

    /// Append members not already present
    pub fn extend(&mut self, members: impl IntoIterator<Item = VertexId>) {
        for m in members {
            if !self.members.contains(&m) {
                self.members.push(m);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_deduplicated_in_order() {
        let group = ParentGroup::new("g", [VertexId(3), VertexId(1), VertexId(3), VertexId(2)]);
        assert_eq!(group.members, vec![VertexId(3), VertexId(1), VertexId(2)]);
        assert_eq!(group.len(), 3);
    }
}
