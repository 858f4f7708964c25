// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Trivia scrubbing for removed subtrees.
//!
//! A comment group is meaningful only through the node it is attached to.
//! When the walker drops a list element or package member, it first scrubs
//! the detached subtree so that no floating comment text survives the
//! removal. Scrubbing empties every comment group in place and stops
//! descending at each group it clears; groups never nest, so there is
//! nothing below one worth visiting.

use crate::nodes::{
    BlockStmt, CommentGroup, Declaration, Expression, Field, FieldList, File, FuncType, Node,
    Spec, Statement,
};

/// Empties every comment group anywhere beneath `node`, in place.
pub fn scrub_trivia(node: &mut Node) {
    match node {
        Node::Expr(expr) => scrub_expression(expr),
        Node::Stmt(stmt) => scrub_statement(stmt),
        Node::Decl(decl) => scrub_declaration(decl),
        Node::Spec(spec) => scrub_spec(spec),
        Node::Field(field) => scrub_field(field),
        Node::FieldList(list) => scrub_field_list(list),
        Node::File(file) => scrub_file(file),
        Node::Package(package) => {
            for file in package.files.values_mut() {
                scrub_file(file);
            }
        }
        Node::Comment(_) => {}
        Node::CommentGroup(group) => group.comments.clear(),
    }
}

fn scrub_group(group: &mut Option<CommentGroup>) {
    if let Some(group) = group {
        group.comments.clear();
    }
}

fn scrub_expression(expr: &mut Expression) {
    match expr {
        Expression::Ident(_) | Expression::Basic(_) => {}
        Expression::Paren(paren) => scrub_expression(&mut paren.expr),
        Expression::Unary(unary) => scrub_expression(&mut unary.expr),
        Expression::Binary(binary) => {
            scrub_expression(&mut binary.left);
            scrub_expression(&mut binary.right);
        }
        Expression::KeyValue(kv) => {
            scrub_expression(&mut kv.key);
            scrub_expression(&mut kv.value);
        }
        Expression::Call(call) => {
            scrub_expression(&mut call.fun);
            for arg in &mut call.args {
                scrub_expression(arg);
            }
        }
        Expression::Index(index) => {
            scrub_expression(&mut index.expr);
            scrub_expression(&mut index.index);
        }
        Expression::Selector(selector) => scrub_expression(&mut selector.expr),
        Expression::FuncLit(lit) => {
            scrub_func_type(&mut lit.ty);
            scrub_block(&mut lit.body);
        }
        Expression::Array(array) => {
            if let Some(len) = &mut array.len {
                scrub_expression(len);
            }
            scrub_expression(&mut array.elem);
        }
        Expression::Struct(st) => scrub_field_list(&mut st.fields),
        Expression::Func(func) => scrub_func_type(func),
    }
}

fn scrub_func_type(func: &mut FuncType) {
    if let Some(params) = &mut func.params {
        scrub_field_list(params);
    }
    if let Some(results) = &mut func.results {
        scrub_field_list(results);
    }
}

fn scrub_statement(stmt: &mut Statement) {
    match stmt {
        Statement::Empty(_) => {}
        Statement::Expr(expr_stmt) => scrub_expression(&mut expr_stmt.expr),
        Statement::Assign(assign) => {
            for expr in &mut assign.lhs {
                scrub_expression(expr);
            }
            for expr in &mut assign.rhs {
                scrub_expression(expr);
            }
        }
        Statement::Return(ret) => {
            for expr in &mut ret.results {
                scrub_expression(expr);
            }
        }
        Statement::Decl(decl_stmt) => scrub_declaration(&mut decl_stmt.decl),
        Statement::If(if_stmt) => {
            if let Some(init) = &mut if_stmt.init {
                scrub_statement(init);
            }
            scrub_expression(&mut if_stmt.cond);
            scrub_block(&mut if_stmt.body);
            if let Some(else_branch) = &mut if_stmt.else_branch {
                scrub_statement(else_branch);
            }
        }
        Statement::For(for_stmt) => {
            if let Some(init) = &mut for_stmt.init {
                scrub_statement(init);
            }
            if let Some(cond) = &mut for_stmt.cond {
                scrub_expression(cond);
            }
            if let Some(post) = &mut for_stmt.post {
                scrub_statement(post);
            }
            scrub_block(&mut for_stmt.body);
        }
        Statement::Block(block) => scrub_block(block),
    }
}

fn scrub_block(block: &mut BlockStmt) {
    for stmt in &mut block.stmts {
        scrub_statement(stmt);
    }
}

fn scrub_declaration(decl: &mut Declaration) {
    match decl {
        Declaration::Func(func) => {
            scrub_group(&mut func.doc);
            if let Some(recv) = &mut func.recv {
                scrub_field_list(recv);
            }
            scrub_func_type(&mut func.ty);
            if let Some(body) = &mut func.body {
                scrub_block(body);
            }
        }
        Declaration::Gen(gen) => {
            scrub_group(&mut gen.doc);
            for spec in &mut gen.specs {
                scrub_spec(spec);
            }
        }
    }
}

fn scrub_spec(spec: &mut Spec) {
    match spec {
        Spec::Import(import) => {
            scrub_group(&mut import.doc);
            scrub_group(&mut import.comment);
        }
        Spec::Value(value) => {
            scrub_group(&mut value.doc);
            scrub_group(&mut value.comment);
            if let Some(ty) = &mut value.ty {
                scrub_expression(ty);
            }
            for expr in &mut value.values {
                scrub_expression(expr);
            }
        }
        Spec::Type(type_spec) => {
            scrub_group(&mut type_spec.doc);
            scrub_group(&mut type_spec.comment);
            scrub_expression(&mut type_spec.ty);
        }
    }
}

fn scrub_field(field: &mut Field) {
    scrub_group(&mut field.doc);
    scrub_group(&mut field.comment);
    scrub_expression(&mut field.ty);
}

fn scrub_field_list(list: &mut FieldList) {
    for field in &mut list.fields {
        scrub_field(field);
    }
}

fn scrub_file(file: &mut File) {
    scrub_group(&mut file.doc);
    for decl in &mut file.decls {
        scrub_declaration(decl);
    }
}
