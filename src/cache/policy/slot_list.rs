//! Slot List Module
//!
//! Doubly linked lists whose nodes live in a shared arena and link to each
//! other by slot index. Several lists (one per LFU frequency tier, or the
//! single LRU order) can share one arena, and any node can be unlinked or
//! moved in O(1) given its slot.
//!
//! ```text
//!   slots: [ Some{a, prev: None, next: 2} | None (free) | Some{c, prev: 0, next: None} ]
//!   chain: head = 0 (oldest) ... tail = 2 (newest)
//! ```

/// Index of a node in a [`SlotArena`].
pub type SlotId = usize;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Chain ==
/// Head/tail bookkeeping of one list threaded through a [`SlotArena`].
///
/// Head holds the oldest node, tail the newest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest node of the chain.
    pub fn head(&self) -> Option<SlotId> {
        self.head
    }

    /// Newest node of the chain.
    #[allow(dead_code)]
    pub fn tail(&self) -> Option<SlotId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// == Slot Arena ==
/// Arena of list nodes with a free list for slot reuse.
#[derive(Debug)]
pub struct SlotArena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<SlotId>,
    len: usize,
}

impl<K> Default for SlotArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SlotArena<K> {
    // == Constructor ==
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    // == Alloc ==
    /// Stores `key` in a detached node and returns its slot.
    pub fn alloc(&mut self, key: K) -> SlotId {
        let node = Node {
            key,
            prev: None,
            next: None,
        };
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    // == Release ==
    /// Frees a slot and returns its key. The node must already be unlinked.
    pub fn release(&mut self, id: SlotId) -> Option<K> {
        let node = self.slots.get_mut(id)?.take()?;
        debug_assert!(node.prev.is_none() && node.next.is_none());
        self.free.push(id);
        self.len -= 1;
        Some(node.key)
    }

    // == Key ==
    /// Returns the key stored at `id`.
    pub fn key(&self, id: SlotId) -> Option<&K> {
        self.node(id).map(|node| &node.key)
    }

    // == Push Back ==
    /// Links a detached node at the tail (newest end) of `chain`.
    pub fn push_back(&mut self, chain: &mut Chain, id: SlotId) {
        let old_tail = chain.tail;
        match self.node_mut(id) {
            Some(node) => {
                node.prev = old_tail;
                node.next = None;
            }
            None => return,
        }

        match old_tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(id);
                }
            }
            None => chain.head = Some(id),
        }
        chain.tail = Some(id);
        chain.len += 1;
    }

    // == Unlink ==
    /// Detaches the node at `id` from `chain`, leaving its slot allocated.
    ///
    /// The node must currently be linked into `chain`.
    pub fn unlink(&mut self, chain: &mut Chain, id: SlotId) {
        let (prev, next) = match self.node_mut(id) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };

        match prev {
            Some(prev_id) => {
                if let Some(node) = self.node_mut(prev_id) {
                    node.next = next;
                }
            }
            None => chain.head = next,
        }
        match next {
            Some(next_id) => {
                if let Some(node) = self.node_mut(next_id) {
                    node.prev = prev;
                }
            }
            None => chain.tail = prev,
        }
        chain.len -= 1;
    }

    // == Move To Back ==
    /// Moves a linked node to the tail of the same chain.
    pub fn move_to_back(&mut self, chain: &mut Chain, id: SlotId) {
        if chain.tail == Some(id) {
            return;
        }
        self.unlink(chain, id);
        self.push_back(chain, id);
    }

    /// Number of allocated nodes across all chains.
    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keys of `chain` from head (oldest) to tail (newest).
    #[cfg(test)]
    pub fn keys(&self, chain: &Chain) -> Vec<&K> {
        let mut keys = Vec::with_capacity(chain.len);
        let mut cursor = chain.head;
        while let Some(id) = cursor {
            let Some(node) = self.node(id) else { break };
            keys.push(&node.key);
            cursor = node.next;
        }
        keys
    }

    fn node(&self, id: SlotId) -> Option<&Node<K>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<K>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }
}
