// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression nodes.
//!
//! [`Expression`] is the declared type of every expression-valued field in
//! the catalogue. Type expressions (array, struct, function types) are
//! expressions too, so a type slot such as `Field::ty` or `TypeSpec::ty`
//! accepts anything from a bare identifier to a full struct type.

use crate::nodes::declaration::FieldList;
use crate::nodes::op::{BinaryOp, LitKind, UnaryOp};
use crate::nodes::statement::BlockStmt;
use crate::nodes::NodeKind;

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A literal of basic type.
///
/// The value is kept in source form; the walker never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
}

impl BasicLit {
    pub fn int(value: i64) -> Self {
        Self {
            kind: LitKind::Int,
            value: value.to_string(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: LitKind::Str,
            value: value.into(),
        }
    }
}

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenExpr {
    pub expr: Expression,
}

/// A unary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Expression,
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Expression,
    pub op: BinaryOp,
    pub right: Expression,
}

/// A key/value pair inside a composite context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueExpr {
    pub key: Expression,
    pub value: Expression,
}

/// A call. The callee is required; the argument list may shrink to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub fun: Expression,
    pub args: Vec<Expression>,
}

/// An index operation, `expr[index]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpr {
    pub expr: Expression,
    pub index: Expression,
}

/// A selection, `expr.selector`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorExpr {
    pub expr: Expression,
    pub selector: Ident,
}

/// A function literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
}

/// An array type. The length is absent for slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub len: Option<Expression>,
    pub elem: Expression,
}

/// A struct type. Deleting the whole field list deletes the struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub fields: FieldList,
}

/// A function type. Both field lists are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub params: Option<FieldList>,
    pub results: Option<FieldList>,
}

/// The closed set of expression shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Ident(Ident),
    Basic(BasicLit),
    Paren(Box<ParenExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    KeyValue(Box<KeyValueExpr>),
    Call(Box<CallExpr>),
    Index(Box<IndexExpr>),
    Selector(Box<SelectorExpr>),
    FuncLit(Box<FuncLit>),
    Array(Box<ArrayType>),
    Struct(StructType),
    Func(FuncType),
}

impl Expression {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Ident(_) => NodeKind::Ident,
            Expression::Basic(_) => NodeKind::BasicLit,
            Expression::Paren(_) => NodeKind::ParenExpr,
            Expression::Unary(_) => NodeKind::UnaryExpr,
            Expression::Binary(_) => NodeKind::BinaryExpr,
            Expression::KeyValue(_) => NodeKind::KeyValueExpr,
            Expression::Call(_) => NodeKind::CallExpr,
            Expression::Index(_) => NodeKind::IndexExpr,
            Expression::Selector(_) => NodeKind::SelectorExpr,
            Expression::FuncLit(_) => NodeKind::FuncLit,
            Expression::Array(_) => NodeKind::ArrayType,
            Expression::Struct(_) => NodeKind::StructType,
            Expression::Func(_) => NodeKind::FuncType,
        }
    }
}

impl From<Ident> for Expression {
    fn from(ident: Ident) -> Self {
        Expression::Ident(ident)
    }
}

impl From<BasicLit> for Expression {
    fn from(lit: BasicLit) -> Self {
        Expression::Basic(lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::op::BinaryOp;

    #[test]
    fn test_expression_kinds() {
        let ident: Expression = Ident::new("x").into();
        assert_eq!(ident.kind(), NodeKind::Ident);

        let sum = Expression::Binary(Box::new(BinaryExpr {
            left: Ident::new("a").into(),
            op: BinaryOp::Add,
            right: BasicLit::int(1).into(),
        }));
        assert_eq!(sum.kind(), NodeKind::BinaryExpr);
    }

    #[test]
    fn test_basic_lit_constructors() {
        assert_eq!(BasicLit::int(42).value, "42");
        assert_eq!(BasicLit::string("hi").kind, LitKind::Str);
    }
}
