//! Machine Memory.
//!
//! Memory is an unbounded map from non-negative address to `i64`, where any address
//! that was never written reads as zero. Programs keep most of their state in
//! a compact prefix (the program image plus a scratch area just past it), but a
//! relative base can point arbitrarily far away. The storage is therefore split:
//! 1. **Dense region:** A `Vec` starting at address 0 that grows when a write lands
//!    within `dense_window` words of its end.
//! 2. **Sparse region:** An ordered map for writes further out. When the dense
//!    region grows over a sparse entry, the entry migrates into the vector.
//!
//! Both halves together preserve the read/write contract; callers never see which
//! one holds a value.

use std::collections::BTreeMap;

use crate::common::addr::Addr;
use crate::config::MemoryConfig;

/// Sparse, zero-initialized word memory.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    dense: Vec<i64>,
    sparse: BTreeMap<u64, i64>,
    dense_window: usize,
}

impl Memory {
    /// Creates a memory image holding `words` at addresses `0..words.len()`.
    pub fn new(words: &[i64], config: &MemoryConfig) -> Self {
        Self {
            dense: words.to_vec(),
            sparse: BTreeMap::new(),
            dense_window: config.dense_window,
        }
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    #[inline]
    pub fn read(&self, addr: Addr) -> i64 {
        let a = addr.val();
        if a < self.dense.len() as u64 {
            self.dense[a as usize]
        } else {
            self.sparse.get(&a).copied().unwrap_or(0)
        }
    }

    /// Writes `value` at `addr`, growing storage as needed.
    pub fn write(&mut self, addr: Addr, value: i64) {
        let a = addr.val();
        let len = self.dense.len() as u64;
        if a < len {
            self.dense[a as usize] = value;
        } else if a - len <= self.dense_window as u64 {
            self.grow_dense(a as usize + 1);
            self.dense[a as usize] = value;
        } else {
            let _ = self.sparse.insert(a, value);
        }
    }

    /// Extends the dense region to `new_len` words, pulling in any sparse entries
    /// it now covers.
    fn grow_dense(&mut self, new_len: usize) {
        let old_len = self.dense.len();
        self.dense.resize(new_len, 0);
        let moved: Vec<u64> = self
            .sparse
            .range(old_len as u64..new_len as u64)
            .map(|(addr, _)| *addr)
            .collect();
        for addr in moved {
            if let Some(value) = self.sparse.remove(&addr) {
                self.dense[addr as usize] = value;
            }
        }
    }

    /// One past the highest address that holds storage.
    pub fn extent(&self) -> u64 {
        let dense = self.dense.len() as u64;
        self.sparse
            .last_key_value()
            .map_or(dense, |(addr, _)| dense.max(addr + 1))
    }

    /// The contiguous region starting at address 0.
    pub fn dense(&self) -> &[i64] {
        &self.dense
    }

    /// Number of words held outside the dense region.
    pub fn sparse_len(&self) -> usize {
        self.sparse.len()
    }

    /// Copies `len` words starting at `start`, zero-filling unset addresses.
    pub fn snapshot(&self, start: Addr, len: u64) -> Vec<i64> {
        (0..len).map(|i| self.read(start.offset(i))).collect()
    }
}
