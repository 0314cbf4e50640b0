use crate::error::EmptyQueueError;

/// A queue that hands elements back in priority order.
pub trait Queue<T> {
    fn push(&mut self, value: T);

    fn pop(&mut self) -> Result<T, EmptyQueueError>;

    fn peek(&self) -> Result<&T, EmptyQueueError>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pops `queue` until it's empty.
pub fn drain_sorted<T, Q: Queue<T> + ?Sized>(queue: &mut Q) -> Vec<T> {
    let mut out = Vec::with_capacity(queue.len());
    while let Ok(x) = queue.pop() {
        out.push(x);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryHeap;

    fn fill<Q: Queue<i32>>(queue: &mut Q, values: &[i32]) {
        for &x in values {
            queue.push(x);
        }
    }

    #[test]
    fn heap_as_queue() {
        let mut heap = BinaryHeap::<i32>::new();
        assert!(Queue::is_empty(&heap));

        fill(&mut heap, &[7, 15, 8, -32, 1]);
        assert_eq!(Queue::len(&heap), 5);
        assert_eq!(Queue::peek(&heap), Ok(&-32));
        assert_eq!(drain_sorted(&mut heap), [-32, 1, 7, 8, 15]);
        assert_eq!(Queue::pop(&mut heap), Err(EmptyQueueError));
    }

    #[test]
    fn dyn_queue() {
        let mut queue: Box<dyn Queue<i32>> = Box::new(BinaryHeap::new());
        queue.push(2);
        queue.push(1);
        assert_eq!(drain_sorted(queue.as_mut()), [1, 2]);
        assert!(queue.is_empty());
    }
}
