// Arena node of the reversed suffix trie.

use hashbrown::HashMap;

/// Index of a node inside the matcher's arena.
pub(crate) type NodeId = u32;

/// The arena slot of the root node.
pub(crate) const ROOT: NodeId = 0;

/// A suffix that ends at a node.
#[derive(Debug, Clone)]
pub(crate) struct Terminal<C> {
    /// The suffix as registered (not reversed).
    pub text: Box<str>,
    /// The suffix's characters, in reading order.
    pub chars: Box<[char]>,
    pub category: C,
}

/// One trie node. Edges are keyed by the character consumed when walking
/// from the end of a word towards its start.
#[derive(Debug, Clone)]
pub(crate) struct Node<C> {
    pub children: HashMap<char, NodeId>,
    pub terminal: Option<Terminal<C>>,
}

impl<C> Node<C> {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: None,
        }
    }

    #[inline]
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }
}
