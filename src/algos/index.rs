use crate::model::{Person, Project};
use std::collections::{BTreeMap, BTreeSet};

/// Turn a `key → values` mapping into `value → keys`. Values which no key
/// lists do not appear in the result.
pub fn invert<K, V>(mapping: &BTreeMap<K, BTreeSet<V>>) -> BTreeMap<V, BTreeSet<K>>
where
    K: Clone + Ord,
    V: Clone + Ord,
{
    let mut inverted: BTreeMap<V, BTreeSet<K>> = BTreeMap::new();
    for (key, values) in mapping {
        for value in values {
            inverted
                .entry(value.clone())
                .or_default()
                .insert(key.clone());
        }
    }
    inverted
}

/// People interested in every project.
#[derive(Debug, Default)]
pub struct InterestIndex {
    people: BTreeMap<Project, BTreeSet<Person>>,
    nobody: BTreeSet<Person>,
}

impl InterestIndex {
    pub fn new(interest: &BTreeMap<Person, BTreeSet<Project>>) -> InterestIndex {
        InterestIndex {
            people: invert(interest),
            nobody: BTreeSet::new(),
        }
    }

    /// People who listed `project`, empty if nobody did.
    pub fn people_for(&self, project: &Project) -> &BTreeSet<Person> {
        self.people.get(project).unwrap_or(&self.nobody)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.people.keys()
    }
}
