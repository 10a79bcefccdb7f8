//! Naming collisions
//!
//! Two resolved names collide when their member sets intersect, i.e. one
//! implementation vertex is claimed by two architecture entries.

use crate::shared::models::ParentGroup;

fn intersects(a: &ParentGroup, b: &ParentGroup) -> bool {
    a.members.iter().any(|m| b.members.contains(m))
}

/// Index pairs `(i, j)`, `i < j`, of colliding groups
pub fn collision_pairs(groups: &[ParentGroup]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..groups.len() {
        for j in (i + 1)..groups.len() {
            if intersects(&groups[i], &groups[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Names involved in at least one collision, first-seen order
pub fn find_collisions(groups: &[ParentGroup]) -> Vec<String> {
    let mut involved = vec![false; groups.len()];
    let mut order = Vec::new();
    for (i, j) in collision_pairs(groups) {
        for k in [i, j] {
            if !involved[k] {
                involved[k] = true;
                order.push(k);
            }
        }
    }
    order.into_iter().map(|k| groups[k].name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::VertexId;
    use pretty_assertions::assert_eq;

    fn group(name: &str, raw: &[u32]) -> ParentGroup {
        ParentGroup::new(name, raw.iter().copied().map(VertexId))
    }

    #[test]
    fn test_troublemaker_keys() {
        let groups = vec![
            group("a", &[1, 2]),
            group("b", &[3]),
            group("c", &[4, 3]),
            group("d", &[2]),
            group("e", &[]),
        ];
        assert_eq!(collision_pairs(&groups), vec![(0, 3), (1, 2)]);
        assert_eq!(find_collisions(&groups), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_no_collisions() {
        let groups = vec![group("a", &[1]), group("b", &[2])];
        assert!(find_collisions(&groups).is_empty());
    }
}
