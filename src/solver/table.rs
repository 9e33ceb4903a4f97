use crate::arena::{StateArena, StateId};
use crate::hash::state_key;

const INITIAL_BUCKETS: usize = 1024;

/// Open-chained hash set over canonical state records: the single source of
/// truth for "has this configuration been seen before".
///
/// Bucket chains are threaded through `State::next`, so the table itself
/// stores only the head handles. Capacity doubles when occupancy reaches
/// 3/4; rehashing reuses each state's cached hash.
#[derive(Debug)]
pub struct TranspositionTable {
    buckets: Vec<Option<StateId>>,
    filled: usize,
    fill_limit: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; INITIAL_BUCKETS],
            filled: 0,
            fill_limit: INITIAL_BUCKETS * 3 / 4,
        }
    }

    /// States currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.filled
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Ensure the cached hash is present and return it.
    /// Hash 0 doubles as the "not computed" sentinel, so a state whose
    /// sequence genuinely hashes to 0 gets recomputed each call.
    #[inline]
    fn key_of(arena: &mut StateArena, id: StateId) -> u32 {
        let s = arena.get_mut(id);
        if s.hash == 0 {
            s.hash = state_key(&s.cells);
        }
        s.hash
    }

    /// Find a stored state with the same canonical cell sequence as `id`.
    /// The hash routes to a bucket; equality is a full memberwise compare.
    pub fn lookup(&self, arena: &mut StateArena, id: StateId) -> Option<StateId> {
        let key = Self::key_of(arena, id);
        let mask = self.buckets.len() - 1;
        let mut cursor = self.buckets[key as usize & mask];
        while let Some(other) = cursor {
            if arena.get(other).cells == arena.get(id).cells {
                return Some(other);
            }
            cursor = arena.get(other).next;
        }
        None
    }

    /// Check-then-insert as one operation: `true` means `id` is new and now
    /// stored; `false` means an equal state already exists and the caller
    /// must release `id` back to the arena.
    ///
    /// Callers racing on the same table must serialise around this call;
    /// the BFS scheduler holds its search lock across it.
    pub fn insert_if_absent(&mut self, arena: &mut StateArena, id: StateId) -> bool {
        if self.lookup(arena, id).is_some() {
            return false;
        }
        if self.filled >= self.fill_limit {
            self.grow(arena);
        }
        self.filled += 1;
        let key = Self::key_of(arena, id);
        let slot = key as usize & (self.buckets.len() - 1);
        arena.get_mut(id).next = self.buckets[slot];
        self.buckets[slot] = Some(id);
        true
    }

    /// Double capacity and redistribute every chain using cached hashes.
    fn grow(&mut self, arena: &mut StateArena) {
        let old_len = self.buckets.len();
        let new_len = old_len * 2;
        self.fill_limit *= 2;
        let mask = new_len - 1;

        let old = std::mem::replace(&mut self.buckets, vec![None; new_len]);
        for head in old {
            let mut cursor = head;
            while let Some(id) = cursor {
                cursor = arena.get(id).next;
                let slot = Self::key_of(arena, id) as usize & mask;
                arena.get_mut(id).next = self.buckets[slot];
                self.buckets[slot] = Some(id);
            }
        }
    }
}
