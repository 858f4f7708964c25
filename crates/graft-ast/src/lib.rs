// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A mutable syntax tree and rewriting walker library.
//!
//! This crate provides a closed catalogue of syntax tree nodes together
//! with a depth-first walker that lets a visitor rewrite the tree in place:
//! replace nodes, delete them, or prune whole subtrees, with structural
//! edits propagated back into parent fields consistently.
//!
//! # Overview
//!
//! - **Nodes**: a fixed set of node shapes grouped into category enums
//!   ([`Expression`], [`Statement`], [`Declaration`], [`Spec`]) plus
//!   structure ([`Field`], [`FieldList`], [`File`], [`Package`]) and trivia
//!   ([`Comment`], [`CommentGroup`]). [`Node`] is the type-erased view the
//!   visitor works with.
//! - **Walking**: [`walk`] drives the traversal; the visitor implements
//!   [`Rewriter`] and speaks through the [`Handle`] it is given.
//! - **Edits**: deletion compacts lists, cascades out of required fields,
//!   and scrubs the trivia of whatever it removes; replacement is
//!   type-checked against the destination field at write-back.
//!
//! Parsing source text into a tree and printing a tree back out are the
//! job of surrounding crates; this library only needs a well-formed tree.
//!
//! # Quick Start
//!
//! ```
//! use graft_ast::{walk, Expression, Handle, Node, Rewriter};
//!
//! /// Renames every identifier `old` to `new`.
//! struct Rename;
//!
//! impl Rewriter for Rename {
//!     fn rewrite<'p>(&mut self, mut handle: Handle<'p>) -> Handle<'p> {
//!         if let Some(Node::Expr(Expression::Ident(ident))) = handle.current_mut() {
//!             if ident.name == "old" {
//!                 ident.name = "new".to_string();
//!             }
//!         }
//!         handle
//!     }
//! }
//!
//! let tree = Node::Expr(Expression::Ident(graft_ast::Ident::new("old")));
//! let rewritten = walk(tree, &mut Rename)
//!     .expect("no type faults")
//!     .expect("root kept");
//! assert_eq!(rewritten, Node::Expr(Expression::Ident(graft_ast::Ident::new("new"))));
//! ```
//!
//! # Deletion Semantics
//!
//! A visitor deletes a node by returning `handle.delete()`. The walker then
//! removes the node from whatever holds it:
//!
//! - a list field drops the element and keeps the survivors in order;
//! - an optional field becomes empty;
//! - a required field cannot become empty, so its owner is deleted too and
//!   the removal cascades upward;
//! - comment groups attached to anything that was removed are emptied so
//!   that no orphaned comment text survives.
//!
//! Deleting the root makes [`walk`] return `None`.

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Error types for rewriting walks.
pub mod error;
pub use error::{Result, WalkError};

mod nodes;
// Re-export all node types for tree construction and traversal.
pub use nodes::*;

/// Rewriting traversal over the node catalogue.
pub mod visitor;
pub use visitor::{scrub_trivia, walk, walk_handle, Ancestor, Ancestors, Handle, Rewriter};
