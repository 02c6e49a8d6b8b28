// logtally - core/fibonacci.rs
//
// Memoised Fibonacci numbers backed by an explicit, owned cache.

use crate::util::error::FibonacciError;
use std::collections::HashMap;

/// Fibonacci calculator that remembers every value it has computed.
///
/// The cache belongs to the calculator and is dropped with it; two
/// calculators never share results.
#[derive(Debug, Default)]
pub struct FibonacciCache {
    cache: HashMap<u64, u128>,
}

impl FibonacciCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return F(n), with F(n) = 0 for every `n <= 0` and F(1) = 1.
    ///
    /// Missing values are filled in bottom-up from the highest cached index,
    /// so large `n` never recurses.
    pub fn get(&mut self, n: i64) -> Result<u128, FibonacciError> {
        if n <= 0 {
            return Ok(0);
        }
        if n == 1 {
            return Ok(1);
        }

        let target = n as u64;
        if let Some(&value) = self.cache.get(&target) {
            return Ok(value);
        }

        // Resume from the highest contiguous cached pair, or from F(0), F(1).
        let mut i = 1u64;
        while self.cache.contains_key(&(i + 1)) && i + 1 < target {
            i += 1;
        }
        let mut prev = self.value_at(i - 1);
        let mut curr = self.value_at(i);

        while i < target {
            let next = prev
                .checked_add(curr)
                .ok_or(FibonacciError::Overflow { n })?;
            i += 1;
            self.cache.insert(i, next);
            prev = curr;
            curr = next;
        }

        tracing::trace!(n, cached = self.cache.len(), "Fibonacci computed");
        Ok(curr)
    }

    /// Number of memoised values.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn value_at(&self, i: u64) -> u128 {
        match i {
            0 => 0,
            1 => 1,
            _ => self.cache.get(&i).copied().unwrap_or(0),
        }
    }
}
