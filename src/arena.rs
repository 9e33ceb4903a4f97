use crate::state::State;

/// Stable handle into the arena's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bump/free-list allocator for fixed-format state records.
///
/// Every record in a run has the same shape (`n_boxes + 1` cell slots),
/// so the arena is a plain `Vec<State>` with geometric growth plus a
/// free-index stack. Accepted states are retained for the rest of the run
/// (path reconstruction needs their `prev` chains); rejected duplicates go
/// back on the free stack and their records, cell buffer included, are
/// reused by the next allocation.
#[derive(Debug)]
pub struct StateArena {
    states: Vec<State>,
    free: Vec<StateId>,
    record_len: usize,
}

impl StateArena {
    #[inline]
    pub fn new(n_boxes: usize) -> Self {
        Self {
            states: Vec::new(),
            free: Vec::new(),
            record_len: n_boxes + 1,
        }
    }

    /// Cell slots per record: player plus one per box.
    #[inline]
    pub fn record_len(&self) -> usize {
        self.record_len
    }

    /// Allocate a zero-hash record linked to `prev`, reusing a freed handle
    /// when one is available. The cell contents are whatever the caller
    /// writes next; the links and hash are always reset.
    pub fn alloc(&mut self, prev: Option<StateId>) -> StateId {
        if let Some(id) = self.free.pop() {
            let s = &mut self.states[id.index()];
            s.hash = 0;
            s.prev = prev;
            s.next = None;
            s.qnext = None;
            return id;
        }
        let id = StateId(u32::try_from(self.states.len()).expect("arena exceeds u32 handles"));
        self.states.push(State {
            hash: 0,
            prev,
            next: None,
            qnext: None,
            cells: vec![0; self.record_len].into_boxed_slice(),
        });
        id
    }

    /// Return a rejected (duplicate) record to the free stack.
    /// The caller must not touch the handle again until it is re-allocated.
    #[inline]
    pub fn release(&mut self, id: StateId) {
        self.free.push(id);
    }

    #[inline]
    pub fn get(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }

    /// Total records ever allocated (live + free).
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Records currently on the free stack.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}
