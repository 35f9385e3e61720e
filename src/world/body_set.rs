use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Stable identifier for a body. A handle goes stale once its body is removed,
/// even if the slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct BodyHandle {
    index: usize,
    generation: u32,
}

impl BodyHandle {
    fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Generational arena that also remembers insertion order, so iteration (and
/// therefore pair generation) is deterministic across removals.
#[derive(Debug, Clone)]
pub struct BodySet<T> {
    slots: Vec<Option<T>>,
    generations: Vec<u32>,
    free_list: VecDeque<usize>,
    order: Vec<BodyHandle>,
}

impl<T> Default for BodySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BodySet<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: VecDeque::new(),
            order: Vec::new(),
        }
    }

    pub fn insert(&mut self, item: T) -> BodyHandle {
        let handle = if let Some(index) = self.free_list.pop_front() {
            self.slots[index] = Some(item);
            BodyHandle::new(index, self.generations[index])
        } else {
            let index = self.slots.len();
            self.slots.push(Some(item));
            self.generations.push(0);
            BodyHandle::new(index, 0)
        };
        self.order.push(handle);
        handle
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        if self.is_valid(handle) {
            self.slots.get(handle.index).and_then(|slot| slot.as_ref())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        if self.is_valid(handle) {
            self.slots.get_mut(handle.index).and_then(|slot| slot.as_mut())
        } else {
            None
        }
    }

    /// Two distinct live entries at once, in argument order.
    pub fn get2_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut T, &mut T)> {
        if a.index == b.index || !self.is_valid(a) || !self.is_valid(b) {
            return None;
        }

        let (first, second, flipped) = if a.index < b.index {
            (a, b, false)
        } else {
            (b, a, true)
        };

        let (left, right) = self.slots.split_at_mut(second.index);
        let first_slot = left.get_mut(first.index).and_then(|slot| slot.as_mut())?;
        let second_slot = right.get_mut(0).and_then(|slot| slot.as_mut())?;

        if flipped {
            Some((second_slot, first_slot))
        } else {
            Some((first_slot, second_slot))
        }
    }

    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        if !self.is_valid(handle) {
            return None;
        }
        let item = self.slots.get_mut(handle.index)?.take()?;
        self.generations[handle.index] = self.generations[handle.index].wrapping_add(1);
        self.free_list.push_back(handle.index);
        self.order.retain(|&h| h != handle);
        Some(item)
    }

    /// Drops every entry for which `keep` returns `false`, in a single pass.
    /// Survivors keep their relative order. Returns the removed handles, oldest first.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<BodyHandle>
    where
        F: FnMut(BodyHandle, &mut T) -> bool,
    {
        let Self {
            slots,
            generations,
            free_list,
            order,
        } = self;
        let mut removed = Vec::new();

        order.retain(|&handle| {
            let Some(slot) = slots.get_mut(handle.index) else {
                return false;
            };
            let kept = slot.as_mut().is_some_and(|item| keep(handle, item));
            if !kept && slot.take().is_some() {
                generations[handle.index] = generations[handle.index].wrapping_add(1);
                free_list.push_back(handle.index);
                removed.push(handle);
            }
            kept
        });
        removed
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Live handles, oldest first.
    pub fn handles(&self) -> &[BodyHandle] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |&h| self.get(h).map(|item| (h, item)))
    }

    /// Live entries in slot order; use when the visiting order does not matter.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().filter_map(|slot| slot.as_mut())
    }

    fn is_valid(&self, handle: BodyHandle) -> bool {
        self.generations
            .get(handle.index)
            .map(|&generation| generation == handle.generation)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut set = BodySet::new();
        let a = set.insert("a");
        let b = set.insert("b");
        assert_eq!(set.get(a), Some(&"a"));
        assert_eq!(set.get(b), Some(&"b"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.handles(), &[a, b]);
    }

    #[test]
    fn test_stale_handle_after_reuse() {
        let mut set = BodySet::new();
        let a = set.insert(1);
        assert_eq!(set.remove(a), Some(1));
        assert_eq!(set.remove(a), None);

        let b = set.insert(2);
        assert_eq!(b.index(), a.index());
        assert_ne!(b.generation(), a.generation());
        assert!(set.get(a).is_none());
        assert!(!set.contains(a));
        assert_eq!(set.get(b), Some(&2));
    }

    #[test]
    fn test_order_survives_removal_and_reuse() {
        let mut set = BodySet::new();
        let a = set.insert('a');
        let b = set.insert('b');
        let c = set.insert('c');
        set.remove(a);
        let d = set.insert('d');
        assert_eq!(set.handles(), &[b, c, d]);
        let values: Vec<char> = set.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec!['b', 'c', 'd']);
    }

    #[test]
    fn test_retain_removes_in_one_pass() {
        let mut set = BodySet::new();
        let handles: Vec<BodyHandle> = (0..6).map(|i| set.insert(i)).collect();

        let removed = set.retain(|_, value| {
            *value *= 10;
            *value % 20 == 0
        });
        assert_eq!(removed, vec![handles[1], handles[3], handles[5]]);
        assert_eq!(set.handles(), &[handles[0], handles[2], handles[4]]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(handles[2]), Some(&20));
        assert!(!set.contains(handles[1]));
        assert_eq!(set.remove(handles[3]), None);

        let reused = set.insert(7);
        assert_eq!(reused.index(), handles[1].index());
        assert_ne!(reused.generation(), handles[1].generation());
        assert_eq!(set.handles(), &[handles[0], handles[2], handles[4], reused]);
    }

    #[test]
    fn test_get2_mut() {
        let mut set = BodySet::new();
        let a = set.insert(1);
        let b = set.insert(2);

        let (x, y) = set.get2_mut(b, a).unwrap();
        assert_eq!((*x, *y), (2, 1));
        *x += 10;
        *y += 20;
        assert_eq!(set.get(a), Some(&21));
        assert_eq!(set.get(b), Some(&12));

        assert!(set.get2_mut(a, a).is_none());
        set.remove(b);
        assert!(set.get2_mut(a, b).is_none());
    }
}
