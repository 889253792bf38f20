//! Per-vertex adjacency storage.
//!
//! Each vertex owns one `AdjacencyList`: a slab of edge slots threaded by a
//! singly-linked list. New records go to the front of the list, so the list
//! order is the reverse of insertion order. Freed slots are recycled through
//! a free list and their generation is bumped, which is what lets an
//! `EdgeHandle` detect that its record is gone.

/// One directed adjacency record.
#[derive(Clone)]
pub(crate) struct EdgeRecord<W> {
    pub(crate) weight: W,
    /// Storage position of the target vertex.
    pub(crate) target: usize,
    /// Slot of the paired record in the target's list (undirected, non-loop only).
    pub(crate) mirror: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone)]
enum SlotState<W> {
    Occupied(EdgeRecord<W>),
    Free(Option<usize>),
}

#[derive(Clone)]
struct EdgeSlot<W> {
    generation: u32,
    state: SlotState<W>,
}

#[derive(Clone)]
pub(crate) struct AdjacencyList<W> {
    slots: Vec<EdgeSlot<W>>,
    head: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<W> AdjacencyList<W> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            free_head: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Inserts a record at the front of the list and returns `(slot, generation)`.
    pub(crate) fn push_front(&mut self, weight: W, target: usize, mirror: Option<usize>) -> (usize, u32) {
        let record = EdgeRecord {
            weight,
            target,
            mirror,
            next: self.head,
        };

        let slot = match self.free_head {
            Some(idx) => {
                let entry = &mut self.slots[idx];
                if let SlotState::Free(next_free) = entry.state {
                    self.free_head = next_free;
                }
                entry.state = SlotState::Occupied(record);
                idx
            }
            None => {
                self.slots.push(EdgeSlot {
                    generation: 0,
                    state: SlotState::Occupied(record),
                });
                self.slots.len() - 1
            }
        };

        self.head = Some(slot);
        self.len += 1;
        (slot, self.slots[slot].generation)
    }

    /// Returns the record in `slot` if it is live and still at `generation`.
    #[inline]
    pub(crate) fn get(&self, slot: usize, generation: u32) -> Option<&EdgeRecord<W>> {
        match self.slots.get(slot) {
            Some(EdgeSlot {
                generation: g,
                state: SlotState::Occupied(record),
            }) if *g == generation => Some(record),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, slot: usize, generation: u32) -> Option<&mut EdgeRecord<W>> {
        match self.slots.get_mut(slot) {
            Some(EdgeSlot {
                generation: g,
                state: SlotState::Occupied(record),
            }) if *g == generation => Some(record),
            _ => None,
        }
    }

    /// Live record in `slot`, whatever its generation. Mirror slots are
    /// stored without one.
    #[inline]
    pub(crate) fn record_mut(&mut self, slot: usize) -> Option<&mut EdgeRecord<W>> {
        match self.slots.get_mut(slot) {
            Some(EdgeSlot {
                state: SlotState::Occupied(record),
                ..
            }) => Some(record),
            _ => None,
        }
    }

    pub(crate) fn set_mirror(&mut self, slot: usize, mirror: Option<usize>) {
        if let Some(EdgeSlot {
            state: SlotState::Occupied(record),
            ..
        }) = self.slots.get_mut(slot)
        {
            record.mirror = mirror;
        }
    }

    /// Slot of the first record (in list order) pointing at `target`.
    pub(crate) fn find(&self, target: usize) -> Option<(usize, u32)> {
        self.iter()
            .find(|(_, _, record)| record.target == target)
            .map(|(slot, generation, _)| (slot, generation))
    }

    /// Unlinks the record in `slot` and returns it.
    ///
    /// O(len): the predecessor has to be found by walking from the head.
    pub(crate) fn unlink(&mut self, slot: usize) -> Option<EdgeRecord<W>> {
        let mut prev: Option<usize> = None;
        let mut curr = self.head;

        while let Some(idx) = curr {
            let next = self.next_of(idx);
            if idx == slot {
                self.splice(prev, next);
                return self.release(idx);
            }
            prev = Some(idx);
            curr = next;
        }
        None
    }

    /// One pass over the list ahead of a swap-and-pop vertex removal.
    ///
    /// Drops every record targeting `removed` and retargets every record
    /// pointing at `last` to `removed`, the position `last` is about to move
    /// into. Returns the number of records dropped.
    pub(crate) fn relabel(&mut self, removed: usize, last: usize) -> usize {
        let mut dropped = 0;
        let mut prev: Option<usize> = None;
        let mut curr = self.head;

        while let Some(idx) = curr {
            let next = self.next_of(idx);
            let SlotState::Occupied(record) = &mut self.slots[idx].state else {
                break;
            };

            if record.target == removed {
                self.splice(prev, next);
                self.release(idx);
                dropped += 1;
            } else {
                if record.target == last {
                    record.target = removed;
                }
                prev = Some(idx);
            }
            curr = next;
        }
        dropped
    }

    /// Iterates `(slot, generation, record)` in list order.
    pub(crate) fn iter(&self) -> Records<'_, W> {
        Records {
            list: self,
            curr: self.head,
            remaining: self.len,
        }
    }

    #[inline]
    fn next_of(&self, idx: usize) -> Option<usize> {
        match &self.slots[idx].state {
            SlotState::Occupied(record) => record.next,
            SlotState::Free(_) => None,
        }
    }

    fn splice(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(p) => {
                if let SlotState::Occupied(record) = &mut self.slots[p].state {
                    record.next = next;
                }
            }
            None => self.head = next,
        }
    }

    fn release(&mut self, idx: usize) -> Option<EdgeRecord<W>> {
        let slot = &mut self.slots[idx];
        let state = core::mem::replace(&mut slot.state, SlotState::Free(self.free_head));
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(idx);
        self.len -= 1;

        match state {
            SlotState::Occupied(mut record) => {
                record.next = None;
                Some(record)
            }
            SlotState::Free(_) => None,
        }
    }
}

/// Borrowing iterator over the live records of one list.
pub(crate) struct Records<'a, W> {
    list: &'a AdjacencyList<W>,
    curr: Option<usize>,
    remaining: usize,
}

impl<W> Clone for Records<'_, W> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}

impl<'a, W> Iterator for Records<'a, W> {
    type Item = (usize, u32, &'a EdgeRecord<W>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        let slot = &self.list.slots[idx];
        match &slot.state {
            SlotState::Occupied(record) => {
                self.curr = record.next;
                self.remaining = self.remaining.saturating_sub(1);
                Some((idx, slot.generation, record))
            }
            SlotState::Free(_) => {
                self.curr = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<W> ExactSizeIterator for Records<'_, W> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(list: &AdjacencyList<u8>) -> Vec<usize> {
        list.iter().map(|(_, _, r)| r.target).collect()
    }

    #[test]
    fn push_front_reverses_insertion_order() {
        let mut list = AdjacencyList::new();
        list.push_front(0u8, 1, None);
        list.push_front(0u8, 2, None);
        list.push_front(0u8, 3, None);
        assert_eq!(targets(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn slot_generation_wraps() {
        let mut list = AdjacencyList::new();
        let (slot, _) = list.push_front(0u8, 1, None);
        list.slots[slot].generation = u32::MAX;
        assert!(list.get(slot, u32::MAX).is_some());

        list.unlink(slot);
        let (reused, generation) = list.push_front(1u8, 2, None);
        assert_eq!(reused, slot);
        assert_eq!(generation, 0);
        assert!(list.get(slot, u32::MAX).is_none());
    }

    #[test]
    fn unlink_middle_and_recycle_slot() {
        let mut list = AdjacencyList::new();
        list.push_front(0u8, 1, None);
        let (mid, gen) = list.push_front(7u8, 2, None);
        list.push_front(0u8, 3, None);

        let removed = list.unlink(mid).map(|r| r.weight);
        assert_eq!(removed, Some(7));
        assert_eq!(targets(&list), vec![3, 1]);
        assert!(list.get(mid, gen).is_none());

        let (reused, new_gen) = list.push_front(9u8, 4, None);
        assert_eq!(reused, mid);
        assert_ne!(new_gen, gen);
        assert!(list.get(mid, gen).is_none());
        assert_eq!(list.get(reused, new_gen).map(|r| r.weight), Some(9));
        assert_eq!(targets(&list), vec![4, 3, 1]);
    }

    #[test]
    fn unlink_missing_slot_is_none() {
        let mut list: AdjacencyList<u8> = AdjacencyList::new();
        assert!(list.unlink(0).is_none());
        let (slot, _) = list.push_front(1, 0, None);
        assert!(list.unlink(slot).is_some());
        assert!(list.unlink(slot).is_none());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn relabel_drops_removed_and_retargets_last() {
        let mut list = AdjacencyList::new();
        list.push_front(0u8, 4, None);
        list.push_front(0u8, 1, None);
        list.push_front(0u8, 2, None);
        list.push_front(0u8, 1, None);

        // vertex 1 is removed, vertex 4 moves into position 1
        let dropped = list.relabel(1, 4);
        assert_eq!(dropped, 2);
        assert_eq!(targets(&list), vec![2, 1]);
    }

    #[test]
    fn relabel_when_removing_last_position() {
        let mut list = AdjacencyList::new();
        list.push_front(0u8, 3, None);
        list.push_front(0u8, 0, None);
        let dropped = list.relabel(3, 3);
        assert_eq!(dropped, 1);
        assert_eq!(targets(&list), vec![0]);
    }
}
