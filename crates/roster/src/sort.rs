//! In-place heap sort driven by a three-way comparator.
//!
//! Two phases over one loop: while `start` counts down, each internal node
//! is sifted into max-heap order (heapify); once `start` hits the root, the
//! boundary `end` walks back instead, swapping the heap maximum out to the
//! shrinking tail and re-sifting the root (extraction). Ascending output
//! for an ascending comparator. Not stable: equal elements may be
//! reordered, and callers must not rely on their relative order.

use std::cmp::Ordering;

pub(crate) fn heapsort<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut start = data.len() / 2;
    let mut end = data.len();

    while end > 1 {
        if start > 0 {
            start -= 1;
        } else {
            end -= 1;
            data.swap(0, end);
        }

        // Sift the node at `start` down into the heap `[start, end)`.
        let mut root = start;
        while root * 2 + 1 < end {
            let mut child = root * 2 + 1;
            if child + 1 < end && compare(&data[child], &data[child + 1]) == Ordering::Less {
                child += 1;
            }
            if compare(&data[root], &data[child]) == Ordering::Less {
                data.swap(root, child);
                root = child;
            } else {
                break;
            }
        }
    }
}
