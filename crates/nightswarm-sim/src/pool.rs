//! Fixed-capacity entity pools.
//!
//! Every slot is allocated once at construction and reused for the whole
//! session — the per-frame loop never touches the allocator. Handles
//! carry a generation so a stale `SlotId` can never reach a reused slot,
//! and releasing twice is a counted no-op rather than a corruption.

use nightswarm_core::types::SlotId;

/// A bounded pool of reusable `T` slots.
pub struct Pool<T> {
    slots: Vec<T>,
    active: Vec<bool>,
    generations: Vec<u32>,
    free: Vec<usize>,
    active_count: usize,
}

impl<T: Default> Pool<T> {
    /// Pre-allocate `capacity` slots, all initially inactive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
            active: vec![false; capacity],
            generations: vec![0; capacity],
            // Popping from the back hands out low indices first.
            free: (0..capacity).rev().collect(),
            active_count: 0,
        }
    }
}

impl<T> Pool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Claim a free slot for reinitialization. Returns `None` when the
    /// pool is exhausted — the caller treats that as "spawn skipped".
    pub fn acquire(&mut self) -> Option<(SlotId, &mut T)> {
        let index = self.free.pop()?;
        self.active[index] = true;
        self.active_count += 1;
        let id = SlotId::new(index as u32, self.generations[index]);
        Some((id, &mut self.slots[index]))
    }

    /// Return a slot to the pool. The generation is bumped so any handle
    /// still pointing at the old occupant goes stale. Returns `false`
    /// (and changes nothing) for stale, double, or out-of-range releases.
    pub fn release(&mut self, id: SlotId) -> bool {
        let index = id.index as usize;
        if index >= self.slots.len()
            || !self.active[index]
            || self.generations[index] != id.generation
        {
            return false;
        }
        self.active[index] = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free.push(index);
        self.active_count -= 1;
        true
    }

    /// Whether the handle still refers to an active occupant.
    pub fn contains(&self, id: SlotId) -> bool {
        let index = id.index as usize;
        index < self.slots.len() && self.active[index] && self.generations[index] == id.generation
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        if self.contains(id) {
            Some(&self.slots[id.index as usize])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        if self.contains(id) {
            Some(&mut self.slots[id.index as usize])
        } else {
            None
        }
    }

    /// Iterate over active slots.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            if self.active[index] {
                Some((SlotId::new(index as u32, self.generations[index]), slot))
            } else {
                None
            }
        })
    }

    /// Iterate mutably over active slots.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> {
        let active = &self.active;
        let generations = &self.generations;
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(move |(index, slot)| {
                if active[index] {
                    Some((SlotId::new(index as u32, generations[index]), slot))
                } else {
                    None
                }
            })
    }
}
