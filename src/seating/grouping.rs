use std::collections::HashMap;

use crate::model::Guest;

/// Guests sharing a group tag, in the order they appeared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestGroup<'a> {
    pub tag: &'a str,
    pub members: Vec<&'a Guest>,
}

impl GuestGroup<'_> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups guests by trimmed tag, keeping first-seen order of groups and members
/// Ungrouped guests each become a group of one
pub fn group_guests(guests: &[Guest]) -> Vec<GuestGroup<'_>> {
    let mut groups: Vec<GuestGroup<'_>> = Vec::new();
    let mut index_by_tag: HashMap<&str, usize> = HashMap::new();

    for guest in guests {
        if guest.is_ungrouped() {
            groups.push(GuestGroup { tag: "", members: vec![guest] });
            continue;
        }

        let tag = guest.group_tag().trim();
        match index_by_tag.get(tag) {
            Some(&index) => groups[index].members.push(guest),
            None => {
                index_by_tag.insert(tag, groups.len());
                groups.push(GuestGroup { tag, members: vec![guest] });
            }
        }
    }

    groups
}

/// Largest group first. Stable, so equal sizes keep first-seen order
pub fn order_by_size(groups: &mut [GuestGroup<'_>]) {
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(group: &'a GuestGroup<'a>) -> Vec<&'a str> {
        group.members.iter().map(|g| g.name()).collect()
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let guests = vec![
            Guest::new("A1", "A"),
            Guest::new("B1", "B"),
            Guest::new("A2", "A"),
            Guest::new("C1", "C"),
            Guest::new("B2", "B"),
        ];
        let groups = group_guests(&guests);

        let tags: Vec<&str> = groups.iter().map(|g| g.tag).collect();
        assert_eq!(tags, vec!["A", "B", "C"]);
        assert_eq!(names(&groups[0]), vec!["A1", "A2"]);
        assert_eq!(names(&groups[1]), vec!["B1", "B2"]);
    }

    #[test]
    fn test_tags_are_trimmed_but_case_sensitive() {
        let guests = vec![
            Guest::new("x", "family"),
            Guest::new("y", " family "),
            Guest::new("z", "Family"),
        ];
        let groups = group_guests(&guests);
        assert_eq!(groups.len(), 2);
        assert_eq!(names(&groups[0]), vec!["x", "y"]);
    }

    #[test]
    fn test_ungrouped_guests_stand_alone() {
        let guests = vec![Guest::new("x", ""), Guest::new("y", "  "), Guest::new("z", "")];
        let groups = group_guests(&guests);
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 1 && g.tag.is_empty()));
    }

    #[test]
    fn test_order_by_size_is_stable() {
        let guests = vec![
            Guest::new("S1", "small"),
            Guest::new("M1", "mid"),
            Guest::new("O1", "other"),
            Guest::new("M2", "mid"),
            Guest::new("L1", "large"),
            Guest::new("L2", "large"),
            Guest::new("L3", "large"),
        ];
        let mut groups = group_guests(&guests);
        order_by_size(&mut groups);

        let tags: Vec<&str> = groups.iter().map(|g| g.tag).collect();
        assert_eq!(tags, vec!["large", "mid", "small", "other"]);
    }
}
