//! Model of a filesystem recovered from a terminal session transcript.
//!
//! A transcript interleaves `cd` and `ls` commands with listing output. It is
//! replayed once into a tree of directories holding files, after which the
//! tree answers aggregate size queries.
//!
//! ```
//! use lib::fs::Tree;
//!
//! let tree = Tree::parse("cd /\nls\n100 a.txt\ndir sub\ncd sub\nls\n50 b.txt\n")?;
//! assert_eq!(tree.size(tree.root()), 150);
//! assert_eq!(tree.sum_at_most(60), 50);
//! assert_eq!(tree.smallest_at_least(120), Some(150));
//! # Ok::<_, lib::fs::ParseError>(())
//! ```

#[cfg(test)]
mod tests;

use std::cell::Cell;
use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while replaying a transcript into a [Tree].
///
/// All of them are fatal for the session being parsed, no partial tree is
/// handed back.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("transcript contains no `cd`")]
    EmptyTranscript,
    #[error("{line}: unrecognized transcript line `{text}`")]
    UnrecognizedLine { line: usize, text: Box<str> },
    #[error("{line}: bad file size `{size}`")]
    BadFileSize { line: usize, size: Box<str> },
    #[error("{line}: `cd ..` while at the root")]
    AscendAboveRoot { line: usize },
    #[error("{line}: listing entry before the first `cd`")]
    NoCurrentDirectory { line: usize },
}

/// Identity of a directory in a [Tree].
///
/// Ids are plain indexes into the tree that issued them and stay valid for its
/// whole lifetime, since directories are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Node {
    name: Box<str>,
    /// Directly attached files, filename to size.
    files: HashMap<Box<str>, u64>,
    /// Children in insertion order.
    children: Vec<NodeId>,
    /// Back-reference used for ascent, never for ownership.
    parent: Option<NodeId>,
    /// Memoized subtree size. `None` until computed or after a mutation of
    /// this node.
    size: Cell<Option<u64>>,
}

/// A rooted tree of directories holding files.
///
/// The tree owns every node in a single arena, handing out [NodeId] indexes.
/// Subtree sizes are memoized per node and invalidated exactly at the node a
/// mutation touches, which is sound under the build-then-query discipline the
/// transcript grammar guarantees.
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Construct a tree holding a single root directory.
    pub fn with_root(name: &str) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.alloc(name, None);
        tree
    }

    /// Replay a transcript into a tree.
    ///
    /// The first `cd` names the root. `dir` listing lines are informational
    /// only, a listed directory becomes a node when a later `cd` enters it. A
    /// leading `$ ` prompt on command lines is accepted and stripped.
    pub fn parse(transcript: &str) -> Result<Self, ParseError> {
        let mut tree = Self { nodes: Vec::new() };
        let mut cursor = Vec::new();

        for (number, line) in transcript.lines().enumerate() {
            let number = number + 1;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let line = line.strip_prefix("$ ").unwrap_or(line);

            if let Some(name) = line.strip_prefix("cd ") {
                match name {
                    ".." => {
                        if cursor.len() <= 1 {
                            return Err(ParseError::AscendAboveRoot { line: number });
                        }

                        cursor.pop();
                    }
                    "/" if !tree.nodes.is_empty() => {
                        cursor.clear();
                        cursor.push(tree.root());
                    }
                    name => {
                        let id = match cursor.last().copied() {
                            Some(current) => tree
                                .child_named(current, name)
                                .unwrap_or_else(|| tree.alloc(name, Some(current))),
                            None => tree.alloc(name, None),
                        };

                        cursor.push(id);
                    }
                }

                continue;
            }

            if line == "ls" || line.starts_with("dir ") {
                continue;
            }

            let Some((size, name)) = line.split_once(' ') else {
                return Err(ParseError::UnrecognizedLine {
                    line: number,
                    text: line.into(),
                });
            };

            match size.parse::<u64>() {
                Ok(size) => {
                    let Some(&current) = cursor.last() else {
                        return Err(ParseError::NoCurrentDirectory { line: number });
                    };

                    tree.add_file(current, name, size);
                }
                Err(..) if size.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                    return Err(ParseError::BadFileSize {
                        line: number,
                        size: size.into(),
                    });
                }
                Err(..) => {
                    return Err(ParseError::UnrecognizedLine {
                        line: number,
                        text: line.into(),
                    });
                }
            }
        }

        if tree.nodes.is_empty() {
            return Err(ParseError::EmptyTranscript);
        }

        log::debug!("parsed transcript into {} directories", tree.nodes.len());
        Ok(tree)
    }

    /// The root directory.
    ///
    /// Always present, both constructors guarantee at least one node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of directories in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of the given directory.
    #[inline]
    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    /// Parent of the given directory, absent for the root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Construct a directory, attaching it under `parent` when one is given.
    ///
    /// Construction cannot fail and duplicate names under one parent are
    /// permitted, producing distinct siblings.
    pub fn alloc(&mut self, name: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());

        self.nodes.push(Node {
            name: name.into(),
            files: HashMap::new(),
            children: Vec::new(),
            parent: None,
            size: Cell::new(None),
        });

        if let Some(parent) = parent {
            self.attach(parent, id);
        }

        id
    }

    /// Establish the parent/child relationship between two directories.
    ///
    /// The parent reference and the child collection are updated together and
    /// the parent's cached size is dropped. Re-attaching an existing child is
    /// a no-op, as is attaching a node that already lives under a different
    /// parent.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).parent.is_some() {
            return;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.nodes[parent.0].size.set(None);
    }

    /// Record a file under the given directory, overwriting any previous size
    /// for the same filename, and drop that directory's cached size.
    pub fn add_file(&mut self, dir: NodeId, name: &str, size: u64) {
        let node = &mut self.nodes[dir.0];
        node.files.insert(name.into(), size);
        node.size.set(None);
    }

    /// Total size of the subtree rooted at `id`.
    ///
    /// Computed as the sum of direct file sizes plus the size of every child,
    /// memoized at each node it visits. An empty directory has size 0.
    pub fn size(&self, id: NodeId) -> u64 {
        let node = self.node(id);

        if let Some(size) = node.size.get() {
            return size;
        }

        let files = node.files.values().sum::<u64>();
        let children = node.children.iter().map(|&c| self.size(c)).sum::<u64>();

        let size = files + children;
        node.size.set(Some(size));
        size
    }

    /// Iterate the immediate children of `id` in insertion order.
    #[inline]
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).children.iter().copied()
    }

    /// Iterate every descendant of `id` in pre-order, each child followed by
    /// its own descendants before the next sibling.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        stack.extend(self.node(id).children.iter().rev());

        Descendants { tree: self, stack }
    }

    /// Sum the sizes of every directory whose size is at most `max_size`,
    /// boundary included.
    pub fn sum_at_most(&self, max_size: u64) -> u64 {
        self.sizes().filter(|&size| size <= max_size).sum()
    }

    /// The smallest directory size that is at least `min_size`, boundary
    /// included, or `None` when no directory qualifies.
    pub fn smallest_at_least(&self, min_size: u64) -> Option<u64> {
        self.sizes().filter(|&size| size >= min_size).min()
    }

    /// Sizes of the root and every descendant.
    fn sizes(&self) -> impl Iterator<Item = u64> + '_ {
        let root = self.root();

        std::iter::once(root)
            .chain(self.descendants(root))
            .map(|id| self.size(id))
    }

    fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&c| self.node(c).name.as_ref() == name)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// See [Tree::descendants].
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.node(id).children.iter().rev());
        Some(id)
    }
}
