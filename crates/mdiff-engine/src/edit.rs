//! Edit operations and the diff output record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::line::LineRecord;

/// A single step of an edit script, read left to right from old to new.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Edit {
    /// A line present on both sides. Both records carry the same text.
    Equal { old: LineRecord, new: LineRecord },
    /// A line removed from the old side.
    Delete { old: LineRecord },
    /// A line added on the new side.
    Insert { new: LineRecord },
}

/// The variant of an [`Edit`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTag {
    Equal,
    Delete,
    Insert,
}

impl fmt::Display for EditTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTag::Equal => write!(f, "equal"),
            EditTag::Delete => write!(f, "delete"),
            EditTag::Insert => write!(f, "insert"),
        }
    }
}

impl Edit {
    /// The operation kind.
    pub fn tag(&self) -> EditTag {
        match self {
            Edit::Equal { .. } => EditTag::Equal,
            Edit::Delete { .. } => EditTag::Delete,
            Edit::Insert { .. } => EditTag::Insert,
        }
    }

    /// The old-side record, if this operation has one.
    pub fn old_line(&self) -> Option<&LineRecord> {
        match self {
            Edit::Equal { old, .. } | Edit::Delete { old } => Some(old),
            Edit::Insert { .. } => None,
        }
    }

    /// The new-side record, if this operation has one.
    pub fn new_line(&self) -> Option<&LineRecord> {
        match self {
            Edit::Equal { new, .. } | Edit::Insert { new } => Some(new),
            Edit::Delete { .. } => None,
        }
    }

    /// Returns `true` for insertions and deletions.
    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }
}

/// The result of diffing two line sequences.
///
/// `edit_distance` always equals the number of non-equal operations in
/// `edits`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOutput {
    /// The edit script in old-to-new order.
    pub edits: Vec<Edit>,
    /// Length of the shortest edit script.
    pub edit_distance: usize,
}

impl DiffOutput {
    /// Returns `true` if the two inputs were identical.
    pub fn is_identical(&self) -> bool {
        self.edit_distance == 0
    }

    /// Number of inserted lines.
    pub fn additions(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| matches!(e, Edit::Insert { .. }))
            .count()
    }

    /// Number of deleted lines.
    pub fn deletions(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| matches!(e, Edit::Delete { .. }))
            .count()
    }

    /// The old-side line texts, in order.
    pub fn old_text(&self) -> Vec<&str> {
        self.edits
            .iter()
            .filter_map(|e| e.old_line())
            .map(|l| l.text.as_str())
            .collect()
    }

    /// The new-side line texts, in order.
    pub fn new_text(&self) -> Vec<&str> {
        self.edits
            .iter()
            .filter_map(|e| e.new_line())
            .map(|l| l.text.as_str())
            .collect()
    }
}
