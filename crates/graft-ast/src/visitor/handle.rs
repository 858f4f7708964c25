// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The node handle passed to visitors.
//!
//! A [`Handle`] wraps exactly one node for the duration of one visitor call
//! plus the walk of that node's subtree. It carries the visitor's verdict in
//! two flags:
//!
//! - `delete`: remove this node from whatever container holds it;
//! - `skip`: keep this node as-is but do not descend into its children.
//!
//! Both flags are monotonic. Once set they stay set for the rest of the
//! walk, and a handle with either flag set (or with no node) is *canceled*:
//! the walker stops looking at it. When both flags are set, delete wins for
//! write-back purposes.
//!
//! Handles are created fresh for every visited node, including every list
//! element, and are never reused across siblings. They cannot outlive the
//! walk: the parent link borrows stack frames of the recursion itself.

use crate::error::{Result, WalkError};
use crate::nodes::{Node, NodeKind};

/// One frame in the chain of enclosing nodes.
///
/// The parent link answers container questions ("am I the doc comment of a
/// declaration?") without aliasing the parent node, whose fields are being
/// rewritten while its children walk. Each frame records the enclosing
/// node's kind and links to the frame above it.
#[derive(Debug, Clone, Copy)]
pub struct Ancestor<'p> {
    kind: NodeKind,
    parent: Option<&'p Ancestor<'p>>,
}

impl<'p> Ancestor<'p> {
    pub(crate) fn new(kind: NodeKind, parent: Option<&'p Ancestor<'p>>) -> Self {
        Self { kind, parent }
    }

    /// The kind of the enclosing node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The frame above this one, or `None` below the root.
    #[must_use]
    pub fn parent(&self) -> Option<&'p Ancestor<'p>> {
        self.parent
    }

    /// Iterates from this frame to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }
}

/// Iterator over an [`Ancestor`] chain, innermost first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Ancestor<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Ancestor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// Ownership wrapper around one node during a walk.
#[derive(Debug)]
pub struct Handle<'p> {
    parent: Option<&'p Ancestor<'p>>,
    node: Option<Node>,
    delete: bool,
    skip: bool,
}

impl<'p> Handle<'p> {
    /// A root handle with no parent.
    #[must_use]
    pub fn new(node: Node) -> Self {
        Self {
            parent: None,
            node: Some(node),
            delete: false,
            skip: false,
        }
    }

    pub(crate) fn child(parent: &'p Ancestor<'p>, node: Node) -> Self {
        Self {
            parent: Some(parent),
            node: Some(node),
            delete: false,
            skip: false,
        }
    }

    /// The frame of the enclosing node, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<&'p Ancestor<'p>> {
        self.parent
    }

    /// The wrapped node, or `None` once deleted.
    #[must_use]
    pub fn current(&self) -> Option<&Node> {
        if self.delete {
            None
        } else {
            self.node.as_ref()
        }
    }

    /// Mutable access to the wrapped node, for in-place edits.
    pub fn current_mut(&mut self) -> Option<&mut Node> {
        if self.delete {
            None
        } else {
            self.node.as_mut()
        }
    }

    /// Overwrites the wrapped node.
    ///
    /// No type check happens here; the replacement is validated against the
    /// destination field when the walker writes it back.
    #[must_use]
    pub fn replace(mut self, node: Node) -> Self {
        self.node = Some(node);
        self
    }

    /// Marks the node for removal from its container.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.delete = true;
        self
    }

    /// Keeps the node but prunes the walk below it.
    #[must_use]
    pub fn break_traversal(mut self) -> Self {
        self.skip = true;
        self
    }

    /// True when the walker must not descend: the handle is empty or a
    /// verdict flag is set.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.node.is_none() || self.delete || self.skip
    }

    /// True when the delete flag is set.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.delete
    }

    /// True when write-back must drop this node: deleted or empty. The skip
    /// flag alone keeps the node.
    pub(crate) fn is_removed(&self) -> bool {
        self.delete || self.node.is_none()
    }

    pub(crate) fn take_node(&mut self) -> Option<Node> {
        self.node.take()
    }

    pub(crate) fn put_node(&mut self, node: Node) {
        self.node = Some(node);
    }

    /// The raw node regardless of verdict flags.
    pub(crate) fn into_node_raw(self) -> Option<Node> {
        self.node
    }

    /// The walk result for the root position: the node unless deleted.
    pub(crate) fn into_root(self) -> Option<Node> {
        if self.delete {
            None
        } else {
            self.node
        }
    }

    /// Write-back conversion: `None` when removed, the typed node when kept.
    /// Fails fast when the node's kind does not fit the destination slot.
    pub(crate) fn take_as<T>(self) -> Result<Option<T>>
    where
        T: TryFrom<Node, Error = WalkError>,
    {
        if self.is_removed() {
            return Ok(None);
        }
        match self.node {
            Some(node) => Ok(Some(T::try_from(node)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{EmptyStmt, Expression, Ident, Statement};

    fn ident_node(name: &str) -> Node {
        Node::Expr(Expression::Ident(Ident::new(name)))
    }

    #[test]
    fn test_fresh_handle_is_live() {
        let handle = Handle::new(ident_node("x"));
        assert!(!handle.is_canceled());
        assert!(!handle.is_deleted());
        assert!(handle.parent().is_none());
        assert_eq!(handle.current().map(Node::kind), Some(NodeKind::Ident));
    }

    #[test]
    fn test_delete_cancels_and_hides_node() {
        let handle = Handle::new(ident_node("x")).delete();
        assert!(handle.is_canceled());
        assert!(handle.is_deleted());
        assert!(handle.current().is_none());
    }

    #[test]
    fn test_break_traversal_cancels_but_keeps_node() {
        let handle = Handle::new(ident_node("x")).break_traversal();
        assert!(handle.is_canceled());
        assert!(!handle.is_deleted());
        assert!(handle.current().is_some());
        assert!(!handle.is_removed());
    }

    #[test]
    fn test_flags_are_monotonic_across_replace() {
        let handle = Handle::new(ident_node("x"))
            .delete()
            .replace(ident_node("y"));
        assert!(handle.is_deleted());
        assert!(handle.current().is_none());
    }

    #[test]
    fn test_delete_dominates_for_write_back() {
        let handle = Handle::new(ident_node("x")).break_traversal().delete();
        assert!(handle.is_removed());
    }

    #[test]
    fn test_replace_swaps_the_node() {
        let mut handle = Handle::new(ident_node("x")).replace(Node::Stmt(Statement::Empty(EmptyStmt)));
        assert_eq!(handle.current().map(Node::kind), Some(NodeKind::EmptyStmt));
        assert!(handle.current_mut().is_some());
    }

    #[test]
    fn test_take_as_checks_the_slot_type() {
        let kept: Option<Ident> = Handle::new(ident_node("x")).take_as().expect("kept");
        assert_eq!(kept.map(|i| i.name), Some("x".to_string()));

        let removed: Option<Ident> = Handle::new(ident_node("x")).delete().take_as().expect("removed");
        assert!(removed.is_none());

        let mismatch = Handle::new(Node::Stmt(Statement::Empty(EmptyStmt))).take_as::<Ident>();
        assert!(mismatch.is_err());
    }

    #[test]
    fn test_ancestor_chain_iterates_to_root() {
        let root = Ancestor::new(NodeKind::File, None);
        let decl = Ancestor::new(NodeKind::GenDecl, Some(&root));
        let spec = Ancestor::new(NodeKind::TypeSpec, Some(&decl));

        let kinds: Vec<NodeKind> = spec.ancestors().map(Ancestor::kind).collect();
        assert_eq!(kinds, [NodeKind::TypeSpec, NodeKind::GenDecl, NodeKind::File]);
        assert_eq!(spec.parent().map(Ancestor::kind), Some(NodeKind::GenDecl));
    }
}
