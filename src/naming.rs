//! User-chosen cycle names
//!
//! The generator and queries never read names; views look them up by cycle
//! number through a [`CycleNameStore`] they own.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::consts::CYCLE_LABEL_PREFIX;

/// Key-value store of names keyed by cycle number.
pub trait CycleNameStore {
    fn get(&self, cycle_number: u32) -> Option<&str>;

    fn set(&mut self, cycle_number: u32, name: &str);

    /// Custom name, or `"Cycle N"` when none is set
    fn display_name(&self, cycle_number: u32) -> String {
        self.get(cycle_number)
            .map_or_else(|| format!("{CYCLE_LABEL_PREFIX} {cycle_number}"), str::to_owned)
    }
}

/// In-memory store. Serializes as a JSON object keyed by cycle number,
/// e.g. `{"1":"Spring push","3":"Release"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleNames(BTreeMap<u32, String>);

impl CycleNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> Entries<'_> {
        self.into_iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

type Entries<'a> = std::iter::Map<btree_map::Iter<'a, u32, String>, fn((&'a u32, &'a String)) -> (u32, &'a str)>;

fn entry<'a>((cycle, name): (&'a u32, &'a String)) -> (u32, &'a str) {
    (*cycle, name.as_str())
}

impl<'a> IntoIterator for &'a CycleNames {
    type IntoIter = Entries<'a>;
    type Item = (u32, &'a str);

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(entry as fn(_) -> _)
    }
}

impl CycleNameStore for CycleNames {
    fn get(&self, cycle_number: u32) -> Option<&str> {
        self.0.get(&cycle_number).map(String::as_str)
    }

    /// Stores the trimmed name; a blank name clears the entry.
    fn set(&mut self, cycle_number: u32, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.0.remove(&cycle_number);
        } else {
            self.0.insert(cycle_number, trimmed.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_trims_and_get() {
        let mut names = CycleNames::new();
        names.set(2, "  Spring push \n");
        assert_eq!(names.get(2), Some("Spring push"));
        assert_eq!(names.get(3), None);
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_blank_name_clears() {
        let mut names = CycleNames::new();
        names.set(1, "Launch");
        names.set(1, "   ");
        assert!(names.is_empty());
        assert_eq!(names.get(1), None);
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut names = CycleNames::new();
        names.set(4, "Audit");
        assert_eq!(names.display_name(4), "Audit");
        assert_eq!(names.display_name(5), "Cycle 5");
    }

    #[test]
    fn test_iter_in_cycle_order() {
        let mut names = CycleNames::new();
        names.set(7, "g");
        names.set(1, "a");
        assert_eq!(names.iter().collect::<Vec<_>>(), vec![(1, "a"), (7, "g")]);

        let mut seen = Vec::new();
        for (cycle, name) in &names {
            seen.push((cycle, name));
        }
        assert_eq!(seen, vec![(1, "a"), (7, "g")]);
    }

    #[test]
    fn test_serde_shape() {
        let mut names = CycleNames::new();
        names.set(1, "Spring push");
        names.set(3, "Release");

        let json = serde_json::to_string(&names).expect("serialize names");
        assert_eq!(json, r#"{"1":"Spring push","3":"Release"}"#);

        let parsed: CycleNames = serde_json::from_str(&json).expect("deserialize names");
        assert_eq!(parsed, names);
    }
}
