//! Reconstruction of the edit script from a search trace.

use crate::edit::Edit;
use crate::error::{DiffError, DiffResult};
use crate::line::LineRecord;
use crate::search::{step_source, Trace};

/// Walk `trace` backwards from `(n, m)` and return the edit script in
/// old-to-new order.
///
/// Each depth contributes its snake as `Equal` operations followed by
/// exactly one `Insert` or `Delete`; depth 0 contributes only its snake.
pub fn backtrack(old: &[LineRecord], new: &[LineRecord], trace: &Trace) -> DiffResult<Vec<Edit>> {
    let mut x = old.len();
    let mut y = new.len();
    let mut edits = Vec::with_capacity(old.len() + new.len());

    for entry in trace.entries().iter().rev() {
        let d = entry.depth as isize;
        let k = x as isize - y as isize;
        let prev_k = step_source(&entry.store, k, d)?;
        let prev_x = entry.store.get(prev_k)?;
        let prev_y = prev_x as isize - prev_k;

        while x > prev_x && y as isize > prev_y {
            x -= 1;
            y -= 1;
            edits.push(Edit::Equal {
                old: old[x].clone(),
                new: new[y].clone(),
            });
        }

        let corrupt = DiffError::CorruptTrace {
            depth: entry.depth,
            x,
            y,
        };

        if entry.depth == 0 {
            if x != 0 || y != 0 {
                return Err(corrupt);
            }
            continue;
        }

        let prev_y = usize::try_from(prev_y).map_err(|_| corrupt.clone())?;
        let edit = match (x == prev_x, y == prev_y) {
            (true, false) => new
                .get(prev_y)
                .map(|line| Edit::Insert { new: line.clone() }),
            (false, true) => old
                .get(prev_x)
                .map(|line| Edit::Delete { old: line.clone() }),
            _ => None,
        };
        edits.push(edit.ok_or(corrupt)?);

        x = prev_x;
        y = prev_y;
    }

    edits.reverse();
    Ok(edits)
}
