//! Ordered tuple enumeration and combination keys

use typecov_chart::ElementType;

/// Every ordered `len`-tuple of indices below `base`, lexicographically
///
/// Works like an odometer: the last position turns fastest.
#[derive(Debug, Clone)]
pub(crate) struct Tuples {
    base: usize,
    digits: Vec<usize>,
    done: bool,
}

impl Tuples {
    pub(crate) fn new(base: usize, len: usize) -> Self {
        Self {
            base,
            digits: vec![0; len],
            done: base == 0 || len == 0,
        }
    }
}

impl Iterator for Tuples {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.digits.clone();

        let mut pos = self.digits.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.digits[pos] += 1;
            if self.digits[pos] < self.base {
                break;
            }
            self.digits[pos] = 0;
        }

        Some(current)
    }
}

/// Sorted, deduplicated types picked by `indices` from `types`
///
/// Permutations and repeats of the same set map to the same key, so a key's
/// length can be shorter than the tuple it came from.
/// Every index must be below `types.len()`, as yielded by [`Tuples`].
pub(crate) fn canonical_key(types: &[ElementType], indices: &[usize]) -> Vec<ElementType> {
    let mut key: Vec<ElementType> = indices.iter().map(|i| types[*i]).collect();
    key.sort_unstable();
    key.dedup();
    key
}
