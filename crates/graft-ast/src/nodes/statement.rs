// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement nodes.

use crate::nodes::declaration::Declaration;
use crate::nodes::expression::Expression;
use crate::nodes::op::AssignOp;
use crate::nodes::NodeKind;

/// An empty statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStmt;

/// An expression used as a statement. Deleting the expression deletes the
/// statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt {
    pub expr: Expression,
}

/// An assignment or short declaration. Both sides are ordered lists and may
/// shrink independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub lhs: Vec<Expression>,
    pub op: AssignOp,
    pub rhs: Vec<Expression>,
}

/// A return statement with zero or more results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub results: Vec<Expression>,
}

/// A declaration in statement position. Deleting the declaration deletes the
/// statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclStmt {
    pub decl: Declaration,
}

/// An if statement. `init` and `else_branch` are optional; condition and
/// body are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub init: Option<Statement>,
    pub cond: Expression,
    pub body: BlockStmt,
    pub else_branch: Option<Statement>,
}

/// A for statement. All header slots are optional; the body is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStmt {
    pub init: Option<Statement>,
    pub cond: Option<Expression>,
    pub post: Option<Statement>,
    pub body: BlockStmt,
}

/// A braced statement list. An empty block is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStmt {
    pub stmts: Vec<Statement>,
}

impl BlockStmt {
    pub fn new(stmts: Vec<Statement>) -> Self {
        Self { stmts }
    }
}

/// The closed set of statement shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Empty(EmptyStmt),
    Expr(ExprStmt),
    Assign(AssignStmt),
    Return(ReturnStmt),
    Decl(DeclStmt),
    If(Box<IfStmt>),
    For(Box<ForStmt>),
    Block(BlockStmt),
}

impl Statement {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Empty(_) => NodeKind::EmptyStmt,
            Statement::Expr(_) => NodeKind::ExprStmt,
            Statement::Assign(_) => NodeKind::AssignStmt,
            Statement::Return(_) => NodeKind::ReturnStmt,
            Statement::Decl(_) => NodeKind::DeclStmt,
            Statement::If(_) => NodeKind::IfStmt,
            Statement::For(_) => NodeKind::ForStmt,
            Statement::Block(_) => NodeKind::BlockStmt,
        }
    }
}

impl From<ExprStmt> for Statement {
    fn from(stmt: ExprStmt) -> Self {
        Statement::Expr(stmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::expression::Ident;

    #[test]
    fn test_statement_kinds() {
        let stmt: Statement = ExprStmt {
            expr: Ident::new("x").into(),
        }
        .into();
        assert_eq!(stmt.kind(), NodeKind::ExprStmt);
        assert_eq!(Statement::Block(BlockStmt::default()).kind(), NodeKind::BlockStmt);
    }
}
