// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for rewriting walks.

use thiserror::Error;

use crate::nodes::NodeKind;

/// A fatal fault detected during a walk.
///
/// The tree is mutated in place, so a walk that returns an error has no
/// partial result to offer: the input must be considered lost. Deletion,
/// subtree skips, and emptied optional fields are normal outcomes and never
/// produce an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalkError {
    /// A visitor stored a replacement whose kind does not fit the
    /// destination field. Downstream consumers trust field kinds
    /// unconditionally, so the walk aborts instead of storing it.
    #[error("cannot store {found} in a slot declared as {expected}")]
    TypeMismatch {
        /// The declared type of the destination field.
        expected: &'static str,
        /// The kind the visitor supplied.
        found: NodeKind,
    },
}

pub type Result<T> = std::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = WalkError::TypeMismatch {
            expected: "expression",
            found: NodeKind::BlockStmt,
        };
        assert_eq!(
            err.to_string(),
            "cannot store BlockStmt in a slot declared as expression"
        );
    }
}
