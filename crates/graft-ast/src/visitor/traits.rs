// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The visitor contract for rewriting walks.

use super::handle::Handle;

/// A visitor that may rewrite the tree while it is walked.
///
/// The contract is handle in, handle out: the walker hands the visitor a
/// [`Handle`] wrapping the current node, and the visitor returns a handle
/// (normally the same one) after calling zero or more of
/// [`Handle::replace`], [`Handle::delete`], or [`Handle::break_traversal`].
/// Returning the handle unchanged continues the walk into the node's
/// children.
///
/// Exactly one verdict applies per visited node. Setting both flags is
/// allowed but delete dominates: a deleted node is reported as removed to
/// its container regardless of the skip flag.
///
/// Plain function items with the signature
/// `fn(Handle<'_>) -> Handle<'_>` satisfy this trait through the blanket
/// implementation below.
///
/// # Example
///
/// ```
/// use graft_ast::{Handle, Node, NodeKind, Rewriter};
///
/// /// Prunes every function body from the tree.
/// struct BodyPruner;
///
/// impl Rewriter for BodyPruner {
///     fn rewrite<'p>(&mut self, handle: Handle<'p>) -> Handle<'p> {
///         match handle.current().map(Node::kind) {
///             Some(NodeKind::BlockStmt) => handle.delete(),
///             _ => handle,
///         }
///     }
/// }
/// ```
pub trait Rewriter {
    /// Visits one node. Called exactly once per node reached by the walk.
    fn rewrite<'p>(&mut self, handle: Handle<'p>) -> Handle<'p>;
}

impl<F> Rewriter for F
where
    F: for<'p> FnMut(Handle<'p>) -> Handle<'p>,
{
    fn rewrite<'p>(&mut self, handle: Handle<'p>) -> Handle<'p> {
        self(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Expression, Ident, Node};

    #[test]
    fn test_function_items_are_rewriters() {
        fn identity(handle: Handle<'_>) -> Handle<'_> {
            handle
        }

        let mut visitor = identity;
        let handle = visitor.rewrite(Handle::new(Node::Expr(Expression::Ident(Ident::new("x")))));
        assert!(!handle.is_canceled());
    }
}
