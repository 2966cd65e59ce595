//! Forward shortest-edit-script search over the implicit edit graph.
//!
//! For each edit distance `d`, the search computes the furthest-reaching
//! point on every diagonal `k` in `{-d, -d+2, ..., d}` and extends it along
//! matching lines. The store is snapshotted *before* each depth is updated;
//! the backtracker relies on entry `d` holding the depth `d - 1` frontier.
//!
//! # Cost
//!
//! Each snapshot holds `2 * (n + m) + 1` slots and one is kept per depth, so
//! a trace for edit distance `D` occupies `O(D * (n + m))` memory. Highly
//! dissimilar inputs approach the quadratic worst case.

use tracing::{debug, trace};

use crate::diagonal::DiagonalStore;
use crate::error::{DiffError, DiffResult};
use crate::line::LineRecord;

/// One recorded depth level: the frontier as it stood before depth `depth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// The edit distance this entry was recorded for.
    pub depth: usize,
    /// Snapshot of the diagonal store at the start of this depth.
    pub store: DiagonalStore,
}

/// The full history of a search, one entry per depth attempted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub(crate) fn from_entries(entries: Vec<TraceEntry>) -> Self {
        Self { entries }
    }

    /// The recorded entries, from depth 0 upward.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Number of recorded depths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no depth was recorded (both inputs empty).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The terminating edit distance, `len() - 1`.
    pub fn edit_distance(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }
}

/// Pick the diagonal a point on `k` at depth `d` was reached from.
///
/// Returns `k + 1` (a downward move, an insertion) when `k == -d`, or when
/// `k != d` and the `k - 1` frontier lies strictly behind the `k + 1`
/// frontier. Otherwise returns `k - 1` (a rightward move, a deletion), so
/// ties favour deleting first.
///
/// Both the search and the backtracker go through this function; the
/// reconstruction is only exact while they agree.
pub(crate) fn step_source(store: &DiagonalStore, k: isize, d: isize) -> DiffResult<isize> {
    if k == -d {
        return Ok(k + 1);
    }
    if k == d {
        return Ok(k - 1);
    }
    if store.get(k - 1)? < store.get(k + 1)? {
        Ok(k + 1)
    } else {
        Ok(k - 1)
    }
}

/// Run the forward search and return its trace.
///
/// Both inputs empty yields an empty trace. Otherwise the trace holds one
/// entry per depth from 0 up to and including the edit distance.
pub fn shortest_edit(old: &[LineRecord], new: &[LineRecord]) -> DiffResult<Trace> {
    let n = old.len();
    let m = new.len();
    if n == 0 && m == 0 {
        return Ok(Trace::default());
    }

    let max = n + m;
    let mut store = DiagonalStore::new(max, 0);
    let mut entries = Vec::new();

    for d in 0..=max {
        entries.push(TraceEntry {
            depth: d,
            store: store.clone(),
        });
        trace!(depth = d, "search depth");

        let d = d as isize;
        for k in (-d..=d).step_by(2) {
            let source = step_source(&store, k, d)?;
            let mut x = store.get(source)?;
            if source < k {
                x += 1;
            }
            let mut y = (x as isize - k) as usize;

            while x < n && y < m && old[x].matches(&new[y]) {
                x += 1;
                y += 1;
            }

            store.set(k, x)?;

            if x >= n && y >= m {
                debug!(
                    old_lines = n,
                    new_lines = m,
                    distance = d,
                    "shortest edit found"
                );
                return Ok(Trace::from_entries(entries));
            }
        }
    }

    Err(DiffError::Unreachable { max })
}
