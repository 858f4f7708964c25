// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Comment nodes.
//!
//! Comments are trivia: they ride along with the node they are attached to
//! and carry no meaning of their own. A [`CommentGroup`] is the unit of
//! attachment (a `doc` or `comment` field on a declaration, spec, field, or
//! file); the individual [`Comment`] lines inside it are still visitable and
//! individually deletable during a walk.

use crate::nodes::NodeKind;

/// A single comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text, without any delimiter.
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }
}

/// A run of consecutive comment lines attached to one owner.
///
/// An empty group is always valid: scrubbing and compaction may empty a
/// group, but never remove the group from its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<Comment>,
}

impl CommentGroup {
    /// Builds a group from one comment line per item.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            comments: lines.into_iter().map(Comment::new).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Joins the comment lines with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.comments.iter().map(|c| c.text.as_str()).collect();
        lines.join("\n")
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        NodeKind::CommentGroup
    }
}
