use std::cmp::Ordering;
use std::collections::HashMap;

use crate::member::Member;

/// Key of the bucket holding members without a known location.
pub const OUTER_SPACE: &str = "Outer space";

/// Members sharing one resolved location name.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup {
    pub key: String,
    pub members: Vec<Member>,
}

impl LocationGroup {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            members: Vec::new(),
        }
    }

    pub fn is_outer_space(&self) -> bool {
        self.key == OUTER_SPACE
    }
}

/// Group members by location for the list view.
///
/// Ordering contract:
/// - named locations first, most populous first; equal sizes keep the order in
///   which the location was first seen;
/// - the `OUTER_SPACE` group last, always present even when empty; a location
///   that is itself named `OUTER_SPACE` joins it;
/// - members inside a group follow [`member_order`].
pub fn group_by_location(members: &[Member]) -> Vec<LocationGroup> {
    let mut outer_space = LocationGroup::new(OUTER_SPACE);
    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for member in members {
        let Some(location) = member
            .location
            .as_ref()
            .filter(|location| location.name != OUTER_SPACE)
        else {
            outer_space.members.push(member.clone());
            continue;
        };
        let slot = *index.entry(location.name.as_str()).or_insert_with(|| {
            groups.push(LocationGroup::new(location.name.as_str()));
            groups.len() - 1
        });
        groups[slot].members.push(member.clone());
    }

    // sort_by is stable, so equal sizes stay in encounter order.
    groups.sort_by(|a, b| b.members.len().cmp(&a.members.len()));
    groups.push(outer_space);

    for group in &mut groups {
        group.members.sort_by(member_order);
    }
    groups
}

/// Named members alphabetically (case-insensitive), then unnamed ones by login.
/// An empty name counts as no name.
pub fn member_order(a: &Member, b: &Member) -> Ordering {
    match (shown_name(a), shown_name(b)) {
        (Some(x), Some(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| a.login.cmp(&b.login)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.login.cmp(&b.login),
    }
}

fn shown_name(member: &Member) -> Option<&str> {
    member.name.as_deref().filter(|name| !name.is_empty())
}
