//! Self-describing tag tree used as the persisted form of every store.
//!
//! A tree is made of named, typed leaves ([`Tag::Bool`], [`Tag::Int`],
//! [`Tag::Double`]) and named sub-trees ([`Tag::Compound`]). Keys inside a
//! [`Compound`] are kept sorted so encoding the same store twice yields the
//! same tree.

use std::collections::BTreeMap;

use crate::error::DecodeError;

/// Discriminant of a [`Tag`], used in decode diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TagKind {
    Bool,
    Int,
    Double,
    Compound,
}

/// A single node of the tag tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Bool(bool),
    Int(i64),
    Double(f64),
    Compound(Compound),
}

impl Tag {
    /// Returns the discriminant of this tag.
    pub const fn kind(&self) -> TagKind {
        match self {
            Self::Bool(_) => TagKind::Bool,
            Self::Int(_) => TagKind::Int,
            Self::Double(_) => TagKind::Double,
            Self::Compound(_) => TagKind::Compound,
        }
    }

    /// Borrows the sub-tree, or reports the node as a non-compound root.
    pub fn as_compound(&self) -> Result<&Compound, DecodeError> {
        match self {
            Self::Compound(compound) => Ok(compound),
            other => Err(DecodeError::NotACompound {
                path: String::new(),
                found: other.kind(),
            }),
        }
    }
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Tag {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Tag {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Self::Compound(value)
    }
}

/// Ordered string-keyed sub-tree.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Compound {
    entries: BTreeMap<String, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, returning the one it replaced.
    pub fn put(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.entries.insert(key.into(), tag.into())
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reads a boolean leaf. Absent keys yield `Ok(None)`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, DecodeError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Tag::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(unexpected(key, TagKind::Bool, other)),
        }
    }

    /// Reads an integer leaf. Absent keys yield `Ok(None)`.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Tag::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(unexpected(key, TagKind::Int, other)),
        }
    }

    /// Reads a floating point leaf. Absent keys yield `Ok(None)`.
    ///
    /// Integer leaves are not widened; numbers must round-trip exactly.
    pub fn get_double(&self, key: &str) -> Result<Option<f64>, DecodeError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Tag::Double(value)) => Ok(Some(*value)),
            Some(other) => Err(unexpected(key, TagKind::Double, other)),
        }
    }

    /// Reads a nested sub-tree. Absent keys yield `Ok(None)`.
    pub fn get_compound(&self, key: &str) -> Result<Option<&Compound>, DecodeError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Tag::Compound(value)) => Ok(Some(value)),
            Some(other) => Err(DecodeError::NotACompound {
                path: key.to_string(),
                found: other.kind(),
            }),
        }
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (String, Tag)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn unexpected(key: &str, expected: TagKind, found: &Tag) -> DecodeError {
    DecodeError::UnexpectedTag {
        path: key.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Compound {
        let mut compound = Compound::new();
        compound.put("flag", true);
        compound.put("count", 4_i64);
        compound.put("level", 3.5_f64);
        compound.put("nested", Compound::new());
        compound
    }

    #[test]
    fn typed_getters_return_matching_leaves() {
        let compound = sample();

        assert_eq!(compound.get_bool("flag"), Ok(Some(true)));
        assert_eq!(compound.get_int("count"), Ok(Some(4)));
        assert_eq!(compound.get_double("level"), Ok(Some(3.5)));
        assert!(matches!(compound.get_compound("nested"), Ok(Some(c)) if c.is_empty()));
    }

    #[test]
    fn typed_getters_report_absent_keys_as_none() {
        let compound = sample();

        assert_eq!(compound.get_bool("missing"), Ok(None));
        assert_eq!(compound.get_int("missing"), Ok(None));
        assert_eq!(compound.get_double("missing"), Ok(None));
        assert_eq!(compound.get_compound("missing"), Ok(None));
    }

    #[test]
    fn typed_getters_reject_wrong_leaf_types() {
        let compound = sample();

        assert_eq!(
            compound.get_double("count"),
            Err(DecodeError::UnexpectedTag {
                path: "count".to_string(),
                expected: TagKind::Double,
                found: TagKind::Int,
            })
        );
        assert_eq!(
            compound.get_compound("flag"),
            Err(DecodeError::NotACompound {
                path: "flag".to_string(),
                found: TagKind::Bool,
            })
        );
    }

    #[test]
    fn keys_iterate_in_sorted_order() {
        let keys: Vec<_> = sample().keys().map(str::to_owned).collect();
        assert_eq!(keys, ["count", "flag", "level", "nested"]);
    }

    #[test]
    fn scalar_root_is_not_a_compound() {
        let err = Tag::Double(1.0).as_compound().unwrap_err();
        assert_eq!(
            err,
            DecodeError::NotACompound {
                path: String::new(),
                found: TagKind::Double,
            }
        );
    }
}
