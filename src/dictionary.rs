use std::collections::BTreeSet;
use std::fmt::Debug;

use fst::raw::CompiledAddr;
use fst::{Set, Streamer};
use thiserror::Error;

use crate::tile::{InvalidLetter, Letter, Tile};

/// A word list navigable as a letter trie.
///
/// A node represents a prefix, its children are the letters that can follow it, linked through
/// [Dictionary::sibling] in alphabetical order.
pub trait Dictionary {
    type Node: Copy + Debug;

    /// The node for the empty prefix.
    fn root(&self) -> Self::Node;

    /// The first child of `node`, if any.
    fn child(&self, node: Self::Node) -> Option<Self::Node>;

    /// The next child of the parent of `node`, if any.
    fn sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// The letter on the edge leading to `node`. Must not be called on the root.
    fn letter(&self, node: Self::Node) -> Letter;

    fn is_end_of_word(&self, node: Self::Node) -> bool;

    fn child_with(&self, node: Self::Node, letter: Letter) -> Option<Self::Node> {
        let mut curr = self.child(node);
        while let Some(c) = curr {
            if self.letter(c) == letter {
                return Some(c);
            }
            curr = self.sibling(c);
        }
        None
    }

    /// Follow `letters` starting from `node`.
    fn lookup(&self, node: Self::Node, letters: impl IntoIterator<Item = Letter>) -> Option<Self::Node> {
        letters
            .into_iter()
            .try_fold(node, |curr, letter| self.child_with(curr, letter))
    }

    fn children(&self, node: Self::Node) -> Children<'_, Self>
    where
        Self: Sized,
    {
        Children {
            dict: self,
            next: self.child(node),
        }
    }

    fn contains(&self, word: &[Letter]) -> bool {
        match self.lookup(self.root(), word.iter().copied()) {
            Some(node) => self.is_end_of_word(node),
            None => false,
        }
    }

    /// Check that every character of `s` can be turned into a tile.
    fn validate_letters(&self, s: &str) -> Result<(), InvalidLetter> {
        s.chars().try_for_each(|c| Tile::from_char(c).map(|_| ()))
    }
}

#[derive(Debug)]
pub struct Children<'d, D: Dictionary> {
    dict: &'d D,
    next: Option<D::Node>,
}

impl<D: Dictionary> Iterator for Children<'_, D> {
    type Item = D::Node;

    fn next(&mut self) -> Option<D::Node> {
        let curr = self.next?;
        self.next = self.dict.sibling(curr);
        Some(curr)
    }
}

/// A [Dictionary] backed by a finite state transducer set of uppercase words.
pub struct FstDictionary {
    set: Set<Vec<u8>>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FstNode {
    addr: CompiledAddr,
    end: bool,
    edge: Option<Edge>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct Edge {
    parent: CompiledAddr,
    index: usize,
    letter: Letter,
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid word {word:?}")]
    InvalidWord {
        word: String,
        #[source]
        letter: Option<InvalidLetter>,
    },
    #[error("failed to build dictionary")]
    Fst(#[from] fst::Error),
}

impl FstDictionary {
    /// Build a dictionary from the given words. Case is ignored and duplicates are allowed.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Result<FstDictionary, DictionaryError> {
        let mut sorted = BTreeSet::new();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(DictionaryError::InvalidWord {
                    word: word.to_string(),
                    letter: None,
                });
            }

            let upper = word
                .chars()
                .map(|c| Letter::from_char(c).map(Letter::to_char))
                .collect::<Result<String, _>>()
                .map_err(|e| DictionaryError::InvalidWord {
                    word: word.to_string(),
                    letter: Some(e),
                })?;
            sorted.insert(upper);
        }

        let set = Set::from_iter(sorted)?;
        Ok(FstDictionary { set })
    }

    /// Build a dictionary from a list with one word per line. Blank lines are skipped.
    pub fn from_word_list(list: &str) -> Result<FstDictionary, DictionaryError> {
        FstDictionary::from_words(list.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Load a dictionary previously serialized with [FstDictionary::as_bytes].
    pub fn from_bytes(bytes: Vec<u8>) -> Result<FstDictionary, DictionaryError> {
        let set = Set::new(bytes)?;

        let mut stream = set.stream();
        while let Some(key) = stream.next() {
            if key.is_empty() || !key.iter().all(u8::is_ascii_uppercase) {
                return Err(DictionaryError::InvalidWord {
                    word: String::from_utf8_lossy(key).into_owned(),
                    letter: None,
                });
            }
        }

        Ok(FstDictionary { set })
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.set.contains(word.to_ascii_uppercase())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.set.as_fst().as_bytes()
    }

    fn node_at(&self, addr: CompiledAddr, edge: Option<Edge>) -> FstNode {
        let end = self.set.as_fst().node(addr).is_final();
        FstNode { addr, end, edge }
    }

    fn edge_at(&self, parent: CompiledAddr, index: usize) -> Option<FstNode> {
        let node = self.set.as_fst().node(parent);
        if index >= node.len() {
            return None;
        }

        let trans = node.transition(index);
        let letter = Letter::from_index(trans.inp - b'A');
        let edge = Edge { parent, index, letter };
        Some(self.node_at(trans.addr, Some(edge)))
    }
}

impl Dictionary for FstDictionary {
    type Node = FstNode;

    fn root(&self) -> FstNode {
        let root = self.set.as_fst().root();
        self.node_at(root.addr(), None)
    }

    fn child(&self, node: FstNode) -> Option<FstNode> {
        self.edge_at(node.addr, 0)
    }

    fn sibling(&self, node: FstNode) -> Option<FstNode> {
        let edge = node.edge?;
        self.edge_at(edge.parent, edge.index + 1)
    }

    fn letter(&self, node: FstNode) -> Letter {
        match node.edge {
            Some(edge) => edge.letter,
            None => panic!("the root node has no letter"),
        }
    }

    fn is_end_of_word(&self, node: FstNode) -> bool {
        node.end
    }

    fn child_with(&self, node: FstNode, letter: Letter) -> Option<FstNode> {
        let index = self.set.as_fst().node(node.addr).find_input(letter.to_ascii())?;
        self.edge_at(node.addr, index)
    }
}

impl Debug for FstDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FstDictionary(len={})", self.len())
    }
}
