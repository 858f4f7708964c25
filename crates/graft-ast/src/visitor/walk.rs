// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The rewriting walker.
//!
//! [`walk`] drives a depth-first, pre-order traversal over a tree and lets
//! the visitor rewrite it in place. For every node reached, the walker:
//!
//! 1. invokes the visitor once with a fresh [`Handle`];
//! 2. stops at the handle if the visitor canceled it (deleted the node,
//!    asked to skip its children, or emptied it);
//! 3. otherwise dispatches on the node's kind and recurses into each
//!    structural field, writing the result back with the kept/removed rule.
//!
//! # Write-back rule
//!
//! A walked child that was not deleted is converted back to the field's
//! declared type and stored; a deleted child is dropped. What happens next
//! depends on the field:
//!
//! - a **required child** that was dropped invalidates its owner, which is
//!   itself reported as deleted to the next level up (cascade deletion);
//! - an **optional child** is simply left empty;
//! - an **ordered list** is compacted: survivors keep their relative order,
//!   and each removed element has its trivia scrubbed before it is dropped.
//!   The two required lists in the catalogue (`GenDecl::specs` and a
//!   non-empty `FieldList::fields`) cascade when compaction empties them.
//!
//! Converting a replacement to the destination type is the one runtime type
//! check in the crate; a wrong-kind replacement aborts the walk with
//! [`WalkError::TypeMismatch`](crate::WalkError::TypeMismatch).
//!
//! The walk is synchronous and strictly recursive: stack depth is
//! proportional to tree depth, and exactly one walk may run over a given
//! tree at a time.

use tracing::{debug, trace};

use super::handle::{Ancestor, Handle};
use super::scrub::scrub_trivia;
use super::traits::Rewriter;
use crate::error::{Result, WalkError};
use crate::nodes::{
    ArrayType, AssignStmt, BinaryExpr, BlockStmt, CallExpr, CommentGroup, DeclStmt, Declaration,
    ExprStmt, Expression, Field, FieldList, File, ForStmt, FuncDecl, FuncLit, FuncType, GenDecl,
    IfStmt, ImportSpec, IndexExpr, KeyValueExpr, Node, Package, ParenExpr, ReturnStmt,
    SelectorExpr, Spec, Statement, StructType, TypeSpec, UnaryExpr, ValueSpec,
};

/// Walks `root` in depth-first order, handing every node to `rewriter`.
///
/// Returns the rewritten tree, or `None` if the visitor deleted the root
/// itself.
///
/// # Errors
///
/// Fails with [`WalkError::TypeMismatch`](crate::WalkError::TypeMismatch)
/// when a replacement node does not fit the field it would be written into.
/// The tree is mutated in place, so an error leaves no usable result.
pub fn walk<R: Rewriter>(root: Node, rewriter: &mut R) -> Result<Option<Node>> {
    let kind = root.kind();
    debug!(root = %kind, "walk started");
    let handle = walk_handle(Handle::new(root), rewriter)?;
    let result = handle.into_root();
    debug!(root = %kind, deleted = result.is_none(), "walk finished");
    Ok(result)
}

/// Walks the subtree wrapped by `handle` and returns the handle with the
/// result of the visit folded in.
///
/// This is the recursion step behind [`walk`]. The returned handle reports
/// removal through its delete flag; callers writing the result into a parent
/// field apply the kept/removed rule to it.
pub fn walk_handle<'p, R: Rewriter>(mut handle: Handle<'p>, rewriter: &mut R) -> Result<Handle<'p>> {
    if handle.is_removed() {
        return Ok(handle);
    }

    handle = rewriter.rewrite(handle);
    if handle.is_canceled() {
        if handle.is_deleted() {
            trace!("node deleted by visitor");
        } else {
            trace!("subtree skipped by visitor");
        }
        return Ok(handle);
    }

    let node = match handle.take_node() {
        Some(node) => node,
        None => return Ok(handle),
    };
    let kind = node.kind();
    let frame = Ancestor::new(kind, handle.parent());
    match walk_children(node, &frame, rewriter)? {
        Some(node) => {
            handle.put_node(node);
            Ok(handle)
        }
        None => {
            trace!(owner = %kind, "required child removed, owner deleted");
            Ok(handle.delete())
        }
    }
}

/// Dispatches on the node kind and walks each structural field.
///
/// Returns `None` when a required child was removed and the node must
/// cascade to deleted.
fn walk_children<R: Rewriter>(node: Node, frame: &Ancestor<'_>, rw: &mut R) -> Result<Option<Node>> {
    let node = match node {
        Node::Expr(expr) => walk_expression(expr, frame, rw)?.map(Node::Expr),
        Node::Stmt(stmt) => walk_statement(stmt, frame, rw)?.map(Node::Stmt),
        Node::Decl(decl) => walk_declaration(decl, frame, rw)?.map(Node::Decl),
        Node::Spec(spec) => walk_spec(spec, frame, rw)?.map(Node::Spec),
        Node::Field(field) => walk_field(field, frame, rw)?.map(Node::Field),
        Node::FieldList(list) => walk_field_list(list, frame, rw)?.map(Node::FieldList),
        Node::File(file) => walk_file(file, frame, rw)?.map(Node::File),
        Node::Package(package) => Some(Node::Package(walk_package(package, frame, rw)?)),
        Node::CommentGroup(group) => Some(Node::CommentGroup(walk_comment_group(group, frame, rw)?)),
        // Leaf: nothing to descend into.
        Node::Comment(comment) => Some(Node::Comment(comment)),
    };
    Ok(node)
}

/// Walks one required or optional child and applies the write-back
/// conversion. `None` means the child was removed.
fn walk_child<T, R>(child: T, frame: &Ancestor<'_>, rw: &mut R) -> Result<Option<T>>
where
    T: Into<Node> + TryFrom<Node, Error = WalkError>,
    R: Rewriter,
{
    walk_handle(Handle::child(frame, child.into()), rw)?.take_as()
}

fn walk_optional<T, R>(child: Option<T>, frame: &Ancestor<'_>, rw: &mut R) -> Result<Option<T>>
where
    T: Into<Node> + TryFrom<Node, Error = WalkError>,
    R: Rewriter,
{
    match child {
        Some(child) => walk_child(child, frame, rw),
        None => Ok(None),
    }
}

/// Walks an ordered list: survivors keep their relative order, removed
/// elements are scrubbed of trivia before they are dropped.
fn walk_list<T, R>(list: Vec<T>, frame: &Ancestor<'_>, rw: &mut R) -> Result<Vec<T>>
where
    T: Into<Node> + TryFrom<Node, Error = WalkError>,
    R: Rewriter,
{
    let mut kept = Vec::with_capacity(list.len());
    for item in list {
        let handle = walk_handle(Handle::child(frame, item.into()), rw)?;
        if handle.is_removed() {
            if let Some(mut node) = handle.into_node_raw() {
                scrub_trivia(&mut node);
            }
        } else if let Some(item) = handle.take_as()? {
            kept.push(item);
        }
    }
    Ok(kept)
}

fn walk_expression<R: Rewriter>(
    expr: Expression,
    frame: &Ancestor<'_>,
    rw: &mut R,
) -> Result<Option<Expression>> {
    let expr = match expr {
        Expression::Ident(_) | Expression::Basic(_) => expr,

        Expression::Paren(paren) => {
            let ParenExpr { expr } = *paren;
            let Some(expr) = walk_child(expr, frame, rw)? else {
                return Ok(None);
            };
            Expression::Paren(Box::new(ParenExpr { expr }))
        }

        Expression::Unary(unary) => {
            let UnaryExpr { op, expr } = *unary;
            let Some(expr) = walk_child(expr, frame, rw)? else {
                return Ok(None);
            };
            Expression::Unary(Box::new(UnaryExpr { op, expr }))
        }

        Expression::Binary(binary) => {
            let BinaryExpr { left, op, right } = *binary;
            let Some(left) = walk_child(left, frame, rw)? else {
                return Ok(None);
            };
            let Some(right) = walk_child(right, frame, rw)? else {
                return Ok(None);
            };
            Expression::Binary(Box::new(BinaryExpr { left, op, right }))
        }

        Expression::KeyValue(kv) => {
            let KeyValueExpr { key, value } = *kv;
            let Some(key) = walk_child(key, frame, rw)? else {
                return Ok(None);
            };
            let Some(value) = walk_child(value, frame, rw)? else {
                return Ok(None);
            };
            Expression::KeyValue(Box::new(KeyValueExpr { key, value }))
        }

        Expression::Call(call) => {
            let CallExpr { fun, args } = *call;
            let Some(fun) = walk_child(fun, frame, rw)? else {
                return Ok(None);
            };
            let args = walk_list(args, frame, rw)?;
            Expression::Call(Box::new(CallExpr { fun, args }))
        }

        Expression::Index(index) => {
            let IndexExpr { expr, index } = *index;
            let Some(expr) = walk_child(expr, frame, rw)? else {
                return Ok(None);
            };
            let Some(index) = walk_child(index, frame, rw)? else {
                return Ok(None);
            };
            Expression::Index(Box::new(IndexExpr { expr, index }))
        }

        Expression::Selector(sel) => {
            let SelectorExpr { expr, selector } = *sel;
            let Some(expr) = walk_child(expr, frame, rw)? else {
                return Ok(None);
            };
            let Some(selector) = walk_child(selector, frame, rw)? else {
                return Ok(None);
            };
            Expression::Selector(Box::new(SelectorExpr { expr, selector }))
        }

        Expression::FuncLit(lit) => {
            let FuncLit { ty, body } = *lit;
            let Some(ty) = walk_child(ty, frame, rw)? else {
                return Ok(None);
            };
            let Some(body) = walk_child(body, frame, rw)? else {
                return Ok(None);
            };
            Expression::FuncLit(Box::new(FuncLit { ty, body }))
        }

        Expression::Array(array) => {
            let ArrayType { len, elem } = *array;
            let len = walk_optional(len, frame, rw)?;
            let Some(elem) = walk_child(elem, frame, rw)? else {
                return Ok(None);
            };
            Expression::Array(Box::new(ArrayType { len, elem }))
        }

        Expression::Struct(st) => {
            let StructType { fields } = st;
            let Some(fields) = walk_child(fields, frame, rw)? else {
                return Ok(None);
            };
            Expression::Struct(StructType { fields })
        }

        Expression::Func(func) => {
            let FuncType { params, results } = func;
            let params = walk_optional(params, frame, rw)?;
            let results = walk_optional(results, frame, rw)?;
            Expression::Func(FuncType { params, results })
        }
    };
    Ok(Some(expr))
}

fn walk_statement<R: Rewriter>(
    stmt: Statement,
    frame: &Ancestor<'_>,
    rw: &mut R,
) -> Result<Option<Statement>> {
    let stmt = match stmt {
        Statement::Empty(_) => stmt,

        Statement::Expr(expr_stmt) => {
            let ExprStmt { expr } = expr_stmt;
            let Some(expr) = walk_child(expr, frame, rw)? else {
                return Ok(None);
            };
            Statement::Expr(ExprStmt { expr })
        }

        Statement::Assign(assign) => {
            let AssignStmt { lhs, op, rhs } = assign;
            let lhs = walk_list(lhs, frame, rw)?;
            let rhs = walk_list(rhs, frame, rw)?;
            Statement::Assign(AssignStmt { lhs, op, rhs })
        }

        Statement::Return(ret) => {
            let ReturnStmt { results } = ret;
            let results = walk_list(results, frame, rw)?;
            Statement::Return(ReturnStmt { results })
        }

        Statement::Decl(decl_stmt) => {
            let DeclStmt { decl } = decl_stmt;
            let Some(decl) = walk_child(decl, frame, rw)? else {
                return Ok(None);
            };
            Statement::Decl(DeclStmt { decl })
        }

        Statement::If(if_stmt) => {
            let IfStmt {
                init,
                cond,
                body,
                else_branch,
            } = *if_stmt;
            let init = walk_optional(init, frame, rw)?;
            let Some(cond) = walk_child(cond, frame, rw)? else {
                return Ok(None);
            };
            let Some(body) = walk_child(body, frame, rw)? else {
                return Ok(None);
            };
            let else_branch = walk_optional(else_branch, frame, rw)?;
            Statement::If(Box::new(IfStmt {
                init,
                cond,
                body,
                else_branch,
            }))
        }

        Statement::For(for_stmt) => {
            let ForStmt {
                init,
                cond,
                post,
                body,
            } = *for_stmt;
            let init = walk_optional(init, frame, rw)?;
            let cond = walk_optional(cond, frame, rw)?;
            let post = walk_optional(post, frame, rw)?;
            let Some(body) = walk_child(body, frame, rw)? else {
                return Ok(None);
            };
            Statement::For(Box::new(ForStmt {
                init,
                cond,
                post,
                body,
            }))
        }

        Statement::Block(block) => {
            let BlockStmt { stmts } = block;
            let stmts = walk_list(stmts, frame, rw)?;
            Statement::Block(BlockStmt { stmts })
        }
    };
    Ok(Some(stmt))
}

fn walk_declaration<R: Rewriter>(
    decl: Declaration,
    frame: &Ancestor<'_>,
    rw: &mut R,
) -> Result<Option<Declaration>> {
    let decl = match decl {
        Declaration::Func(func) => {
            let FuncDecl {
                doc,
                recv,
                name,
                ty,
                body,
            } = *func;
            let doc = walk_optional(doc, frame, rw)?;
            let recv = walk_optional(recv, frame, rw)?;
            let Some(name) = walk_child(name, frame, rw)? else {
                return Ok(None);
            };
            let Some(ty) = walk_child(ty, frame, rw)? else {
                return Ok(None);
            };
            let body = walk_optional(body, frame, rw)?;
            Declaration::Func(Box::new(FuncDecl {
                doc,
                recv,
                name,
                ty,
                body,
            }))
        }

        Declaration::Gen(gen) => {
            let GenDecl { doc, kind, specs } = gen;
            let doc = walk_optional(doc, frame, rw)?;
            let specs = walk_list(specs, frame, rw)?;
            // The spec list is required: a keyword with nothing under it is
            // no declaration at all.
            if specs.is_empty() {
                return Ok(None);
            }
            Declaration::Gen(GenDecl { doc, kind, specs })
        }
    };
    Ok(Some(decl))
}

fn walk_spec<R: Rewriter>(spec: Spec, frame: &Ancestor<'_>, rw: &mut R) -> Result<Option<Spec>> {
    let spec = match spec {
        Spec::Import(import) => {
            let ImportSpec {
                doc,
                name,
                path,
                comment,
            } = import;
            let doc = walk_optional(doc, frame, rw)?;
            let name = walk_optional(name, frame, rw)?;
            let Some(path) = walk_child(path, frame, rw)? else {
                return Ok(None);
            };
            let comment = walk_optional(comment, frame, rw)?;
            Spec::Import(ImportSpec {
                doc,
                name,
                path,
                comment,
            })
        }

        Spec::Value(value) => {
            let ValueSpec {
                doc,
                names,
                ty,
                values,
                comment,
            } = value;
            let doc = walk_optional(doc, frame, rw)?;
            let names = walk_list(names, frame, rw)?;
            let ty = walk_optional(ty, frame, rw)?;
            let values = walk_list(values, frame, rw)?;
            let comment = walk_optional(comment, frame, rw)?;
            Spec::Value(ValueSpec {
                doc,
                names,
                ty,
                values,
                comment,
            })
        }

        Spec::Type(type_spec) => {
            let TypeSpec {
                doc,
                name,
                ty,
                comment,
            } = type_spec;
            let doc = walk_optional(doc, frame, rw)?;
            let Some(name) = walk_child(name, frame, rw)? else {
                return Ok(None);
            };
            let Some(ty) = walk_child(ty, frame, rw)? else {
                return Ok(None);
            };
            let comment = walk_optional(comment, frame, rw)?;
            Spec::Type(TypeSpec {
                doc,
                name,
                ty,
                comment,
            })
        }
    };
    Ok(Some(spec))
}

fn walk_field<R: Rewriter>(field: Field, frame: &Ancestor<'_>, rw: &mut R) -> Result<Option<Field>> {
    let Field {
        doc,
        names,
        ty,
        tag,
        comment,
    } = field;
    let doc = walk_optional(doc, frame, rw)?;
    let names = walk_list(names, frame, rw)?;
    let Some(ty) = walk_child(ty, frame, rw)? else {
        return Ok(None);
    };
    let tag = walk_optional(tag, frame, rw)?;
    let comment = walk_optional(comment, frame, rw)?;
    Ok(Some(Field {
        doc,
        names,
        ty,
        tag,
        comment,
    }))
}

fn walk_field_list<R: Rewriter>(
    list: FieldList,
    frame: &Ancestor<'_>,
    rw: &mut R,
) -> Result<Option<FieldList>> {
    let FieldList { fields } = list;
    // A list that starts out empty stays as it is; only a list emptied by
    // compaction takes its owner down with it.
    if fields.is_empty() {
        return Ok(Some(FieldList { fields }));
    }
    let fields = walk_list(fields, frame, rw)?;
    if fields.is_empty() {
        return Ok(None);
    }
    Ok(Some(FieldList { fields }))
}

fn walk_comment_group<R: Rewriter>(
    group: CommentGroup,
    frame: &Ancestor<'_>,
    rw: &mut R,
) -> Result<CommentGroup> {
    let CommentGroup { comments } = group;
    let comments = walk_list(comments, frame, rw)?;
    // Trivia never cascades: an empty group is always valid.
    Ok(CommentGroup { comments })
}

fn walk_file<R: Rewriter>(file: File, frame: &Ancestor<'_>, rw: &mut R) -> Result<Option<File>> {
    let File { doc, name, decls } = file;
    let doc = walk_optional(doc, frame, rw)?;
    let Some(name) = walk_child(name, frame, rw)? else {
        return Ok(None);
    };
    let decls = walk_list(decls, frame, rw)?;
    Ok(Some(File { doc, name, decls }))
}

/// Walks every member of a package and writes the survivors back. Member
/// removal never cascades to siblings or to the package itself.
fn walk_package<R: Rewriter>(
    package: Package,
    frame: &Ancestor<'_>,
    rw: &mut R,
) -> Result<Package> {
    let Package { files } = package;
    let mut kept = std::collections::BTreeMap::new();
    for (path, file) in files {
        let handle = walk_handle(Handle::child(frame, file.into()), rw)?;
        if handle.is_removed() {
            if let Some(mut node) = handle.into_node_raw() {
                scrub_trivia(&mut node);
            }
            trace!(path = %path, "package member removed");
        } else if let Some(file) = handle.take_as::<File>()? {
            kept.insert(path, file);
        }
    }
    Ok(Package { files: kept })
}
