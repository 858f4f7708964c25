// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The node catalogue.
//!
//! The tree is built from a fixed, closed set of node shapes, grouped into
//! category enums ([`Expression`], [`Statement`], [`Declaration`], [`Spec`])
//! plus the structural types ([`Field`], [`FieldList`], [`File`],
//! [`Package`]) and trivia ([`Comment`], [`CommentGroup`]). Every structural
//! field of every node is declared with its exact category type, so a
//! well-typed construction cannot put a statement where an expression
//! belongs.
//!
//! [`Node`] is the type-erased view of the same catalogue. It exists for the
//! visitor boundary: a walk hands every node to the visitor as a [`Node`],
//! and whatever comes back is converted to the destination field's declared
//! type with `TryFrom`. That conversion is the single runtime type check in
//! the crate; it fails with [`WalkError::TypeMismatch`] when a visitor swaps
//! in a node of the wrong kind.

mod declaration;
mod expression;
mod module;
mod op;
mod statement;
mod trivia;

pub use declaration::*;
pub use expression::*;
pub use module::*;
pub use op::*;
pub use statement::*;
pub use trivia::*;

use std::fmt;

use crate::error::WalkError;

/// Discriminant for every concrete node shape in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Expressions
    Ident,
    BasicLit,
    ParenExpr,
    UnaryExpr,
    BinaryExpr,
    KeyValueExpr,
    CallExpr,
    IndexExpr,
    SelectorExpr,
    FuncLit,
    ArrayType,
    StructType,
    FuncType,
    // Statements
    EmptyStmt,
    ExprStmt,
    AssignStmt,
    ReturnStmt,
    DeclStmt,
    IfStmt,
    ForStmt,
    BlockStmt,
    // Declarations and specs
    FuncDecl,
    GenDecl,
    ImportSpec,
    ValueSpec,
    TypeSpec,
    // Structure
    Field,
    FieldList,
    File,
    Package,
    // Trivia
    Comment,
    CommentGroup,
}

impl NodeKind {
    /// The catalogue name of this kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Ident => "Ident",
            NodeKind::BasicLit => "BasicLit",
            NodeKind::ParenExpr => "ParenExpr",
            NodeKind::UnaryExpr => "UnaryExpr",
            NodeKind::BinaryExpr => "BinaryExpr",
            NodeKind::KeyValueExpr => "KeyValueExpr",
            NodeKind::CallExpr => "CallExpr",
            NodeKind::IndexExpr => "IndexExpr",
            NodeKind::SelectorExpr => "SelectorExpr",
            NodeKind::FuncLit => "FuncLit",
            NodeKind::ArrayType => "ArrayType",
            NodeKind::StructType => "StructType",
            NodeKind::FuncType => "FuncType",
            NodeKind::EmptyStmt => "EmptyStmt",
            NodeKind::ExprStmt => "ExprStmt",
            NodeKind::AssignStmt => "AssignStmt",
            NodeKind::ReturnStmt => "ReturnStmt",
            NodeKind::DeclStmt => "DeclStmt",
            NodeKind::IfStmt => "IfStmt",
            NodeKind::ForStmt => "ForStmt",
            NodeKind::BlockStmt => "BlockStmt",
            NodeKind::FuncDecl => "FuncDecl",
            NodeKind::GenDecl => "GenDecl",
            NodeKind::ImportSpec => "ImportSpec",
            NodeKind::ValueSpec => "ValueSpec",
            NodeKind::TypeSpec => "TypeSpec",
            NodeKind::Field => "Field",
            NodeKind::FieldList => "FieldList",
            NodeKind::File => "File",
            NodeKind::Package => "Package",
            NodeKind::Comment => "Comment",
            NodeKind::CommentGroup => "CommentGroup",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The type-erased view of a node, as handed to visitors.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Expr(Expression),
    Stmt(Statement),
    Decl(Declaration),
    Spec(Spec),
    Field(Field),
    FieldList(FieldList),
    File(File),
    Package(Package),
    Comment(Comment),
    CommentGroup(CommentGroup),
}

impl Node {
    /// The concrete kind of the wrapped node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Expr(expr) => expr.kind(),
            Node::Stmt(stmt) => stmt.kind(),
            Node::Decl(decl) => decl.kind(),
            Node::Spec(spec) => spec.kind(),
            Node::Field(_) => NodeKind::Field,
            Node::FieldList(_) => NodeKind::FieldList,
            Node::File(_) => NodeKind::File,
            Node::Package(_) => NodeKind::Package,
            Node::Comment(_) => NodeKind::Comment,
            Node::CommentGroup(_) => NodeKind::CommentGroup,
        }
    }
}

/// Wires a field slot type into the type-erased layer: `From<T> for Node`
/// plus the checked `TryFrom<Node> for T` used at write-back.
macro_rules! node_slot {
    ($ty:ty, $expected:literal, $value:ident => $into:expr, $pat:pat => $out:expr) => {
        impl From<$ty> for Node {
            fn from($value: $ty) -> Node {
                $into
            }
        }

        impl TryFrom<Node> for $ty {
            type Error = WalkError;

            fn try_from(node: Node) -> std::result::Result<Self, WalkError> {
                match node {
                    $pat => Ok($out),
                    other => Err(WalkError::TypeMismatch {
                        expected: $expected,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

node_slot!(Expression, "expression", value => Node::Expr(value), Node::Expr(value) => value);
node_slot!(Statement, "statement", value => Node::Stmt(value), Node::Stmt(value) => value);
node_slot!(Declaration, "declaration", value => Node::Decl(value), Node::Decl(value) => value);
node_slot!(Spec, "spec", value => Node::Spec(value), Node::Spec(value) => value);
node_slot!(Field, "field", value => Node::Field(value), Node::Field(value) => value);
node_slot!(FieldList, "field list", value => Node::FieldList(value), Node::FieldList(value) => value);
node_slot!(File, "file", value => Node::File(value), Node::File(value) => value);
node_slot!(Package, "package", value => Node::Package(value), Node::Package(value) => value);
node_slot!(Comment, "comment", value => Node::Comment(value), Node::Comment(value) => value);
node_slot!(
    CommentGroup,
    "comment group",
    value => Node::CommentGroup(value),
    Node::CommentGroup(value) => value
);
node_slot!(
    Ident,
    "identifier",
    value => Node::Expr(Expression::Ident(value)),
    Node::Expr(Expression::Ident(value)) => value
);
node_slot!(
    BasicLit,
    "basic literal",
    value => Node::Expr(Expression::Basic(value)),
    Node::Expr(Expression::Basic(value)) => value
);
node_slot!(
    FuncType,
    "function type",
    value => Node::Expr(Expression::Func(value)),
    Node::Expr(Expression::Func(value)) => value
);
node_slot!(
    BlockStmt,
    "block statement",
    value => Node::Stmt(Statement::Block(value)),
    Node::Stmt(Statement::Block(value)) => value
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_round_trip() {
        let node: Node = Ident::new("x").into();
        assert_eq!(node.kind(), NodeKind::Ident);
        let ident = Ident::try_from(node).expect("conversion");
        assert_eq!(ident.name, "x");
    }

    #[test]
    fn test_category_conversion_accepts_any_member() {
        let node: Node = Ident::new("x").into();
        let expr = Expression::try_from(node).expect("an identifier is an expression");
        assert_eq!(expr.kind(), NodeKind::Ident);
    }

    #[test]
    fn test_mismatched_conversion_reports_both_sides() {
        let node: Node = Statement::Empty(EmptyStmt).into();
        let err = Ident::try_from(node).unwrap_err();
        assert_eq!(
            err,
            WalkError::TypeMismatch {
                expected: "identifier",
                found: NodeKind::EmptyStmt,
            }
        );
        assert!(err.to_string().contains("EmptyStmt"));
    }

    #[test]
    fn test_kind_display_matches_name() {
        assert_eq!(NodeKind::CommentGroup.to_string(), "CommentGroup");
        assert_eq!(NodeKind::FieldList.name(), "FieldList");
    }
}
