//! Comparator-driven binary min-heap.
//!
//! Positions are 1-based: the root is at position 1, the children of
//! position `i` are `2i` and `2i + 1`, and its parent is `i / 2`. Position
//! `i` lives in slot `i - 1` of the backing `Vec`, so no placeholder value
//! is needed for the unused position 0.
//!
//! The heap is not stable: elements the comparator reports as equal come
//! out in an unspecified (but deterministic) order.

use std::cmp::Ordering;
use std::fmt;

/// Returned by [`MinHeap::extract`] when the heap holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("extract called on an empty heap")
    }
}

impl std::error::Error for EmptyHeapError {}

/// Comparator used by [`MinHeap::natural`].
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// A binary min-heap ordered by a caller-supplied comparator.
///
/// `compare(a, b)` returning [`Ordering::Less`] means `a` comes out before
/// `b`. For every element except the root, `compare(parent, element)` is
/// never [`Ordering::Greater`].
pub struct MinHeap<T, C = NaturalOrder<T>> {
    items: Vec<T>,
    compare: C,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap ordered by `T`'s own [`Ord`].
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::natural();
        for item in iter {
            heap.insert(item);
        }
        heap
    }
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `compare`.
    pub fn new(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Add `item`, sifting it up towards the root.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len());
    }

    /// Remove and return the minimum element.
    ///
    /// The last element takes the root's place and is sifted down.
    pub fn extract(&mut self) -> Result<T, EmptyHeapError> {
        if self.items.is_empty() {
            return Err(EmptyHeapError);
        }
        let root = self.items.swap_remove(0);
        self.sift_down(1);
        Ok(root)
    }

    /// Remove all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the elements in storage (level) order, root first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drain the heap into a vector ordered non-decreasingly by the
    /// comparator.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.extract() {
            sorted.push(item);
        }
        sorted
    }

    #[inline]
    fn greater(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a - 1], &self.items[b - 1]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if !self.greater(parent, pos) {
                break;
            }
            self.items.swap(parent - 1, pos - 1);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos;
            if left > len {
                break;
            }
            let right = left + 1;
            // On a tie between the children the right one is taken.
            let child = if right > len || self.greater(right, left) {
                left
            } else {
                right
            };
            if !self.greater(pos, child) {
                break;
            }
            self.items.swap(pos - 1, child - 1);
            pos = child;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (2..=self.items.len()).all(|pos| !self.greater(pos / 2, pos))
    }
}

/// Sort `items` by draining them through a fresh heap ordered by `compare`.
///
/// The output is ordered non-decreasingly and is a permutation of the
/// input; it is not stable.
pub fn heapsort<T, C>(items: impl IntoIterator<Item = T>, compare: C) -> Vec<T>
where
    C: Fn(&T, &T) -> Ordering,
{
    let items = items.into_iter();
    let mut heap = MinHeap::with_capacity(items.size_hint().0, compare);
    for item in items {
        heap.insert(item);
    }
    heap.into_sorted_vec()
}

/// Renders the storage order as `[TOP] a b c [BOTTOM]`.
impl<T: fmt::Display, C> fmt::Display for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[TOP]")?;
        for item in &self.items {
            write!(f, " {item}")?;
        }
        f.write_str(" [BOTTOM]")
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn extract_from_empty_heap_is_an_error() {
        let mut heap: MinHeap<i32> = MinHeap::natural();
        assert_eq!(heap.extract(), Err(EmptyHeapError));
        assert!(heap.peek().is_none());
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn extracts_in_comparator_order() {
        let mut heap = MinHeap::natural();
        for v in [5, 3, 8, 1, 9, 2] {
            heap.insert(v);
        }
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.extract(), Ok(1));
        assert_eq!(heap.extract(), Ok(2));
        assert_eq!(heap.extract(), Ok(3));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn single_element() {
        let mut heap = MinHeap::natural();
        heap.insert("only");
        assert_eq!(heap.extract(), Ok("only"));
        assert!(heap.is_empty());
        assert_eq!(heap.extract(), Err(EmptyHeapError));
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut heap = MinHeap::new(|a: &i32, b: &i32| b.cmp(a));
        for v in [4, 7, 1] {
            heap.insert(v);
        }
        assert_eq!(heap.extract(), Ok(7));
        assert_eq!(heap.extract(), Ok(4));
        assert_eq!(heap.extract(), Ok(1));
    }

    #[test]
    fn comparator_on_tuple_priority() {
        let mut heap = MinHeap::new(|a: &(f64, char), b: &(f64, char)| a.0.total_cmp(&b.0));
        heap.insert((2.5, 'b'));
        heap.insert((0.5, 'a'));
        heap.insert((f64::INFINITY, 'd'));
        heap.insert((9.0, 'c'));
        assert_eq!(heap.extract().map(|e| e.1), Ok('a'));
        assert_eq!(heap.extract().map(|e| e.1), Ok('b'));
        assert_eq!(heap.extract().map(|e| e.1), Ok('c'));
        assert_eq!(heap.extract().map(|e| e.1), Ok('d'));
    }

    #[test]
    fn equal_priorities_all_come_out() {
        let mut heap = MinHeap::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        for c in ['x', 'y', 'z'] {
            heap.insert((1, c));
        }
        heap.insert((0, 'w'));
        assert_eq!(heap.extract(), Ok((0, 'w')));
        let mut rest: Vec<char> = std::iter::from_fn(|| heap.extract().ok())
            .map(|e| e.1)
            .collect();
        rest.sort();
        assert_eq!(rest, vec!['x', 'y', 'z']);
    }

    #[test]
    fn order_invariant_holds_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut heap = MinHeap::natural();
        let mut mirror: Vec<i32> = Vec::new();

        for _ in 0..2000 {
            if rng.random_range(0..3) < 2 {
                let v = rng.random_range(-100..100);
                heap.insert(v);
                mirror.push(v);
            } else {
                let expected = mirror.iter().copied().min();
                match expected {
                    Some(min) => {
                        assert_eq!(heap.extract(), Ok(min));
                        let at = mirror.iter().position(|&v| v == min).unwrap();
                        mirror.swap_remove(at);
                    }
                    None => assert_eq!(heap.extract(), Err(EmptyHeapError)),
                }
            }
            assert!(heap.is_heap());
            assert_eq!(heap.len(), mirror.len());
        }
    }

    #[test]
    fn heapsort_is_an_ordered_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [0usize, 1, 2, 7, 64, 500] {
            let input: Vec<i32> = (0..len).map(|_| rng.random_range(-20..20)).collect();
            let sorted = heapsort(input.clone(), i32::cmp);

            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            let mut expected = input;
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn heapsort_strings() {
        let sorted = heapsort(["pear", "apple", "fig"], |a: &&str, b: &&str| a.cmp(b));
        assert_eq!(sorted, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn from_iter_and_into_sorted_vec() {
        let heap: MinHeap<u8> = [3, 1, 2].into_iter().collect();
        assert!(heap.is_heap());
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn clear_empties_the_heap() {
        let mut heap: MinHeap<i32> = (0..10).collect();
        heap.clear();
        assert!(heap.is_empty());
        heap.insert(4);
        assert_eq!(heap.peek(), Some(&4));
    }

    #[test]
    fn display_shows_storage_order() {
        let mut heap = MinHeap::natural();
        for v in [3, 1, 2] {
            heap.insert(v);
        }
        // 3 is sifted below 1; 2 is appended as the right child.
        assert_eq!(heap.to_string(), "[TOP] 1 3 2 [BOTTOM]");
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(MinHeap::<i32>::natural().to_string(), "[TOP] [BOTTOM]");
    }
}
