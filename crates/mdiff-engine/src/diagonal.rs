//! Diagonal store: furthest-reaching x per diagonal, addressed by signed k.
//!
//! Diagonal `k = x - y` ranges over `[-max, +max]`. The backing buffer has
//! `2 * max + 1` slots; non-negative `k` lives at slot `k` and negative `k`
//! wraps to slot `capacity + k`, the upper half of the buffer.

use crate::error::{DiffError, DiffResult};

/// Fixed-capacity array indexed by diagonal.
///
/// `Clone` produces a fully independent snapshot: the buffer is owned, so
/// writes to the source never show through a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagonalStore {
    max: usize,
    slots: Vec<usize>,
}

impl DiagonalStore {
    /// Allocate a store covering diagonals `-max..=max`, every slot set to `default`.
    pub fn new(max: usize, default: usize) -> Self {
        Self {
            max,
            slots: vec![default; 2 * max + 1],
        }
    }

    /// The largest addressable diagonal magnitude.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of backing slots (`2 * max + 1`).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read the x-value stored for diagonal `k`.
    pub fn get(&self, k: isize) -> DiffResult<usize> {
        let slot = self.slot(k)?;
        Ok(self.slots[slot])
    }

    /// Write the x-value for diagonal `k`.
    pub fn set(&mut self, k: isize, value: usize) -> DiffResult<()> {
        let slot = self.slot(k)?;
        self.slots[slot] = value;
        Ok(())
    }

    fn slot(&self, k: isize) -> DiffResult<usize> {
        if k.unsigned_abs() > self.max {
            return Err(DiffError::OutOfBounds {
                index: k,
                max: self.max,
            });
        }
        if k < 0 {
            Ok(self.slots.len() - k.unsigned_abs())
        } else {
            Ok(k as usize)
        }
    }
}
