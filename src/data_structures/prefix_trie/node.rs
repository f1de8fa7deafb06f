// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the prefix trie.
//!
//! Nodes live in a single arena owned by the trie and refer to their
//! children by [`NodeId`]. Every node except the root has exactly one parent.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node in the arena.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the prefix trie.
///
/// Each node represents one normalized character of a key path. Terminal nodes
/// additionally carry the original word and its normalized form.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Normalized character on the edge leading here (`None` for the root)
    pub key_char: Option<char>,

    /// Original spelling of the word ending at this node
    pub label: Option<String>,

    /// Lowercased form of `label`
    pub normalized_form: Option<String>,

    /// Map of characters to child nodes
    pub children: HashMap<char, NodeId, FnvBuildHasher>,

    /// Whether this node represents the end of a registered word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a non-terminal node reached through `key_char`.
    pub fn with_char(key_char: char) -> Self {
        Self {
            key_char: Some(key_char),
            ..Self::default()
        }
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// A node without children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Marks this node as the end of `word`. The last call wins for the stored spelling.
    pub(crate) fn mark_terminal(&mut self, word: &str, normalized: &str) {
        self.label = Some(word.to_string());
        self.normalized_form = Some(normalized.to_string());
        self.is_terminal = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nodes_are_not_terminal() {
        let root = TrieNode::root();
        assert!(root.key_char.is_none());
        assert!(root.is_leaf());
        assert!(!root.is_terminal);

        let node = TrieNode::with_char('d');
        assert_eq!(node.key_char, Some('d'));
        assert!(node.label.is_none());
        assert!(node.normalized_form.is_none());
    }

    #[test]
    fn test_mark_terminal_overwrites_label() {
        let mut node = TrieNode::with_char('e');
        node.mark_terminal("Zygote", "zygote");
        node.mark_terminal("ZYGOTE", "zygote");

        assert!(node.is_terminal);
        assert_eq!(node.label.as_deref(), Some("ZYGOTE"));
        assert_eq!(node.normalized_form.as_deref(), Some("zygote"));
    }
}
