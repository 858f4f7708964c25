// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declaration, spec, and field nodes.
//!
//! Declarations are the units a file is made of. A [`GenDecl`] groups one or
//! more [`Spec`]s under a single keyword (`import`, `const`, `type`, `var`);
//! its spec list is required, so a generic declaration whose specs are all
//! deleted deletes itself. Fields and field lists carry the same
//! required-list rule: a [`FieldList`] that is compacted down to nothing
//! deletes its owner, while one that was empty to begin with is left alone.

use crate::nodes::expression::{BasicLit, Expression, FuncType, Ident};
use crate::nodes::op::DeclKind;
use crate::nodes::statement::BlockStmt;
use crate::nodes::trivia::CommentGroup;
use crate::nodes::NodeKind;

/// A function declaration.
///
/// The name and type are required. The receiver makes the declaration a
/// method; the body is absent for external declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    pub body: Option<BlockStmt>,
}

/// A keyword declaration holding one or more specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub doc: Option<CommentGroup>,
    pub kind: DeclKind,
    pub specs: Vec<Spec>,
}

/// The closed set of declaration shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Func(Box<FuncDecl>),
    Gen(GenDecl),
}

impl Declaration {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Declaration::Func(_) => NodeKind::FuncDecl,
            Declaration::Gen(_) => NodeKind::GenDecl,
        }
    }
}

/// An import spec: an optional local name and a required path literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub doc: Option<CommentGroup>,
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub comment: Option<CommentGroup>,
}

/// A constant or variable spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub doc: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Option<Expression>,
    pub values: Vec<Expression>,
    pub comment: Option<CommentGroup>,
}

/// A type spec: a required name bound to a required type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub ty: Expression,
    pub comment: Option<CommentGroup>,
}

/// The closed set of spec shapes inside a [`GenDecl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

impl Spec {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Spec::Import(_) => NodeKind::ImportSpec,
            Spec::Value(_) => NodeKind::ValueSpec,
            Spec::Type(_) => NodeKind::TypeSpec,
        }
    }
}

/// One field in a struct type, parameter list, or result list.
///
/// The type is required: deleting it deletes the field. The name list may be
/// empty (anonymous fields, unnamed results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Expression,
    pub tag: Option<BasicLit>,
    pub comment: Option<CommentGroup>,
}

impl Field {
    /// A field with a single name, a type, and no trivia.
    pub fn named(name: impl Into<String>, ty: Expression) -> Self {
        Self {
            doc: None,
            names: vec![Ident::new(name)],
            ty,
            tag: None,
            comment: None,
        }
    }
}

/// An ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}
