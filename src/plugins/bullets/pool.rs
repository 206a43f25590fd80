//! Fixed-capacity bullet arena.
//!
//! # Layout
//! ```text
//!   slots:  [ s0 | s1 | s2 | s3 | ... ]      pre-allocated once, never grows
//!   free:   Vec<BulletHandle>                 pop = acquire, push = recycle
//!   active: head ─▶ s2 ─▶ s0 ─▶ s3 ─▶ None    intrusive list through `Slot::next`
//!                                  ▲
//!                                 tail        (append keeps spawn order)
//! ```
//!
//! # Invariants
//! - A slot is either on the free list or on the active list, never both.
//! - `next` links are only meaningful for active slots; free slots carry `None`.
//! - Every recycle bumps the slot generation, so handles held across a recycle go stale
//!   and `get` returns `None` for them instead of aliasing the new occupant.
//! - The bullet itself never sees or copies its link.

use bevy::prelude::*;

use crate::bullet::Bullet;

/// Stable, generational reference to a pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BulletHandle {
    index: u32,
    generation: u32,
}

impl BulletHandle {
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot {
    bullet: Bullet,
    next: Option<BulletHandle>,
    generation: u32,
    active: bool,
}

#[derive(Resource, Debug)]
pub struct BulletPool {
    slots: Vec<Slot>,
    free: Vec<BulletHandle>,
    head: Option<BulletHandle>,
    tail: Option<BulletHandle>,
    active: usize,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| Slot { bullet: Bullet::new(), next: None, generation: 0, active: false })
            .collect();
        // Reversed so the lowest index is handed out first.
        let free = (0..capacity as u32)
            .rev()
            .map(|index| BulletHandle { index, generation: 0 })
            .collect();

        Self { slots, free, head: None, tail: None, active: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn active_len(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Take a free slot, reset its bullet, and append it to the active list.
    ///
    /// `None` means the pool is exhausted.
    pub fn acquire(&mut self) -> Option<(BulletHandle, &mut Bullet)> {
        let handle = self.free.pop()?;

        match self.tail {
            Some(tail) => self.set_next(tail, Some(handle)),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.active += 1;

        let slot = &mut self.slots[handle.index()];
        slot.active = true;
        slot.next = None;
        slot.bullet.reset();
        Some((handle, &mut slot.bullet))
    }

    pub fn get(&self, handle: BulletHandle) -> Option<&Bullet> {
        self.live_slot(handle).map(|slot| &slot.bullet)
    }

    pub fn get_mut(&mut self, handle: BulletHandle) -> Option<&mut Bullet> {
        let slot = self.slots.get_mut(handle.index())?;
        (slot.active && slot.generation == handle.generation).then_some(&mut slot.bullet)
    }

    #[inline]
    pub fn first_active(&self) -> Option<BulletHandle> {
        self.head
    }

    /// Successor of `handle` in the active list.
    pub fn next(&self, handle: BulletHandle) -> Option<BulletHandle> {
        self.live_slot(handle)?.next
    }

    /// Active bullets in list (spawn) order.
    pub fn iter(&self) -> impl Iterator<Item = (BulletHandle, &Bullet)> + '_ {
        std::iter::successors(self.head, |&handle| self.next(handle))
            .filter_map(|handle| self.get(handle).map(|bullet| (handle, bullet)))
    }

    /// Unlink every dead bullet and return its slot to the free list.
    ///
    /// `on_recycle` sees each handle before it goes stale. Returns the number recycled.
    pub fn recycle_dead(&mut self, mut on_recycle: impl FnMut(BulletHandle)) -> usize {
        let mut recycled = 0;
        let mut prev: Option<BulletHandle> = None;
        let mut cursor = self.head;

        while let Some(handle) = cursor {
            let slot = &self.slots[handle.index()];
            let next = slot.next;

            if slot.bullet.is_dead() {
                self.unlink(prev, handle, next);
                on_recycle(handle);
                self.release(handle);
                recycled += 1;
            } else {
                prev = Some(handle);
            }
            cursor = next;
        }

        recycled
    }

    /// Kill every active bullet. They become dead on their next update.
    pub fn kill_all(&mut self) {
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            let slot = &mut self.slots[handle.index()];
            slot.bullet.kill();
            cursor = slot.next;
        }
    }

    /// Return every active slot to the free list immediately.
    pub fn clear(&mut self) {
        while let Some(handle) = self.head {
            let next = self.slots[handle.index()].next;
            self.unlink(None, handle, next);
            self.release(handle);
        }
    }

    fn live_slot(&self, handle: BulletHandle) -> Option<&Slot> {
        let slot = self.slots.get(handle.index())?;
        (slot.active && slot.generation == handle.generation).then_some(slot)
    }

    #[inline]
    fn set_next(&mut self, handle: BulletHandle, next: Option<BulletHandle>) {
        self.slots[handle.index()].next = next;
    }

    fn unlink(&mut self, prev: Option<BulletHandle>, handle: BulletHandle, next: Option<BulletHandle>) {
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        if self.tail == Some(handle) {
            self.tail = prev;
        }
        self.active -= 1;
    }

    fn release(&mut self, handle: BulletHandle) {
        let slot = &mut self.slots[handle.index()];
        slot.active = false;
        slot.next = None;
        slot.generation = slot.generation.wrapping_add(1);
        slot.bullet.reset();

        self.free.push(BulletHandle { index: handle.index, generation: slot.generation });
    }
}
