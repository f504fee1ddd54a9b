use crate::tile::Position;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry. Ordered by key, then by insertion sequence, both reversed so
/// the `BinaryHeap` pops the smallest key and, among equal keys, the oldest
/// entry first.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: u32,
    seq: u64,
    tile: usize,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Tiles awaiting expansion, ordered by a key function supplied by the
/// caller. The function sees a tile's position and its distance from the
/// start; tiles themselves carry no ordering.
///
/// With a constant key the frontier is strict FIFO.
pub struct Frontier<K>
where
    K: Fn(Position, u32) -> u32,
{
    heap: BinaryHeap<Entry>,
    key_fn: K,
    next_seq: u64,
}

impl<K> Frontier<K>
where
    K: Fn(Position, u32) -> u32,
{
    pub fn new(key_fn: K) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            key_fn,
            next_seq: 0,
        }
    }

    /// Queues `tile` and returns the key it was queued under.
    pub fn push(&mut self, tile: usize, position: Position, distance: u32) -> u32 {
        let key = (self.key_fn)(position, distance);
        self.heap.push(Entry {
            key,
            seq: self.next_seq,
            tile,
        });
        self.next_seq += 1;
        key
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.tile)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
