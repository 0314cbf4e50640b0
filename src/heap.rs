use crate::error::EmptyQueueError;
use crate::queue::Queue;
use log::{debug, trace};

#[inline]
fn parent(node: usize) -> usize {
    (node + 1) / 2 - 1
}

#[inline]
fn left_child(node: usize) -> usize {
    (node + 1) * 2 - 1
}

#[inline]
fn right_child(node: usize) -> usize {
    (node + 1) * 2
}

/// A min-heap: the smallest element is always at the root.
///
/// The elements live in a dense `Vec` read as a complete binary tree. Equal elements
/// come out in no particular order. For max-priority order push `std::cmp::Reverse`
/// values instead.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Copies `seq` into a new heap. The input doesn't have to be sorted.
    ///
    /// O(n)
    pub fn from_slice(seq: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(seq.to_vec())
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The heap's storage in tree order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// O(1)
    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        match self.data.first() {
            Some(min) => Ok(min),
            None => {
                trace!("peek on an empty queue");
                Err(EmptyQueueError)
            }
        }
    }

    /// O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.len() - 1);
    }

    /// Removes the minimum. On an empty heap nothing changes.
    ///
    /// O(log n)
    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        use std::mem;

        let mut res = match self.data.pop() {
            Some(last) => last,
            None => {
                trace!("pop on an empty queue");
                return Err(EmptyQueueError);
            }
        };
        if let Some(root) = self.data.first_mut() {
            res = mem::replace(root, res);
            self.sift_down(0);
        }

        Ok(res)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Pops every element, smallest first.
    ///
    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(min) = self.pop() {
            sorted.push(min);
        }
        sorted
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = parent(node);

            if self.data[node] < self.data[parent] {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// When both children are equal and smaller than `node`, descends into the left one.
    ///
    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        loop {
            let left = left_child(node);
            let right = right_child(node);

            if left >= self.len() {
                break;
            }

            let min = if right < self.len() && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[min] < self.data[node] {
                self.data.swap(node, min);
                node = min;
            } else {
                break;
            }
        }
    }

    /// Bottom-up build, O(n).
    fn heapify(&mut self) {
        debug!("heapify: {} elements", self.len());
        if self.len() < 2 {
            return;
        }
        for node in (0..=parent(self.len() - 1)).rev() {
            self.sift_down(node);
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.heapify();
        heap
    }
}

impl<T: Ord> std::iter::FromIterator<T> for BinaryHeap<T> {
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for x in iter {
            self.push(x);
        }
    }
}

impl<T: Ord> Queue<T> for BinaryHeap<T> {
    #[inline]
    fn push(&mut self, value: T) {
        BinaryHeap::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Result<T, EmptyQueueError> {
        BinaryHeap::pop(self)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyQueueError> {
        BinaryHeap::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}

/// Heap sort. Sorts `seq` ascending, using a heap built from a copy of it.
///
/// O(n log n) time, O(n) extra space.
pub fn sort<T: Ord + Clone>(seq: &mut [T]) {
    debug!("sort: {} elements", seq.len());
    let mut heap = BinaryHeap::from_slice(seq);

    for (slot, min) in seq.iter_mut().zip(std::iter::from_fn(|| heap.pop().ok())) {
        *slot = min;
    }
}
