//! Longest-suffix matching over a fixed set of suffixes.
//!
//! Suffixes are inserted into a trie in reverse (last character first), so
//! finding the longest registered suffix of a word is a single walk from the
//! word's last character towards its first. The cost of a lookup depends on
//! the length of the word, not on how many suffixes are registered.
//!
//! Nodes live in a flat arena and refer to their children by index.
//!
//! ```
//! use raiz_suffix::SuffixMatcher;
//!
//! let mut matcher = SuffixMatcher::new();
//! matcher.insert("ismos", 1u8).insert("a", 1).insert("ma", 1);
//!
//! let word: Vec<char> = "algorismos".chars().collect();
//! let m = matcher.longest_suffix(&word).unwrap();
//! assert_eq!(m.as_str(), "ismos");
//! assert_eq!(m.category(), 1);
//! ```

mod node;

use node::{Node, NodeId, ROOT, Terminal};

/// The longest registered suffix found at the end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'a, C> {
    text: &'a str,
    chars: &'a [char],
    category: C,
}

impl<'a, C: Copy> SuffixMatch<'a, C> {
    /// The matched suffix as registered.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The matched suffix's characters.
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }

    /// Length of the suffix in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: empty suffixes are never registered.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The category registered with the suffix.
    pub fn category(&self) -> C {
        self.category
    }
}

/// A set of `(suffix, category)` pairs answering longest-suffix queries.
///
/// Built once, then queried read-only; a built matcher can be shared
/// between threads freely.
#[derive(Clone)]
pub struct SuffixMatcher<C = u8> {
    nodes: Vec<Node<C>>,
    suffix_count: usize,
}

impl<C> std::fmt::Debug for SuffixMatcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixMatcher")
            .field("suffix_count", &self.suffix_count)
            .field("node_count", &self.nodes.len())
            .finish()
    }
}

impl<C: Copy> Default for SuffixMatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> SuffixMatcher<C> {
    /// Create an empty matcher holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            suffix_count: 0,
        }
    }

    /// Build a matcher from a table of `(suffix, category)` entries.
    pub fn from_entries<S, I>(entries: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, C)>,
    {
        let mut matcher = Self::new();
        for (suffix, category) in entries {
            matcher.insert(suffix.as_ref(), category);
        }
        matcher
    }

    /// Register `suffix` under `category`.
    ///
    /// Registering the same suffix twice keeps the last category. An empty
    /// suffix can never match and is ignored.
    pub fn insert(&mut self, suffix: &str, category: C) -> &mut Self {
        if suffix.is_empty() {
            return self;
        }

        let chars: Box<[char]> = suffix.chars().collect();
        let mut current = ROOT;
        for &c in chars.iter().rev() {
            current = match self.nodes[current as usize].child(c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(Node::new());
                    self.nodes[current as usize].children.insert(c, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        if node.terminal.is_none() {
            self.suffix_count += 1;
        }
        node.terminal = Some(Terminal {
            text: suffix.into(),
            chars,
            category,
        });
        self
    }

    /// Check whether `word` was registered verbatim.
    ///
    /// Being the tail of a longer registered suffix is not enough.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = ROOT;
        for c in word.chars().rev() {
            match self.nodes[current as usize].child(c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.nodes[current as usize]
            .terminal
            .as_ref()
            .is_some_and(|t| &*t.text == word)
    }

    /// Find the longest registered suffix that `word` ends with.
    ///
    /// Walks from the last character of `word` backwards and stops at the
    /// first missing edge. Each terminal passed on the way is a registered
    /// suffix of `word`; a deeper terminal is always longer than a shallower
    /// one, so the last one seen is the answer. Returns `None` when no
    /// registered suffix matches.
    pub fn longest_suffix(&self, word: &[char]) -> Option<SuffixMatch<'_, C>> {
        let mut current = ROOT;
        let mut best: Option<&Terminal<C>> = None;

        for &c in word.iter().rev() {
            let Some(next) = self.nodes[current as usize].child(c) else {
                break;
            };
            current = next;
            if let Some(terminal) = &self.nodes[current as usize].terminal {
                if best.is_none_or(|b| terminal.chars.len() > b.chars.len()) {
                    best = Some(terminal);
                }
            }
        }

        best.map(|t| SuffixMatch {
            text: &t.text,
            chars: &t.chars,
            category: t.category,
        })
    }

    /// Number of distinct registered suffixes.
    pub fn len(&self) -> usize {
        self.suffix_count
    }

    /// `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.suffix_count == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
