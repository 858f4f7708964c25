// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! File and package nodes.

use std::collections::BTreeMap;

use crate::nodes::declaration::Declaration;
use crate::nodes::expression::Ident;
use crate::nodes::trivia::CommentGroup;

/// A single source file: an optional doc group, a required package name, and
/// an ordered declaration list. An empty declaration list is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub decls: Vec<Declaration>,
}

impl File {
    /// A file with the given package name and no declarations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: None,
            name: Ident::new(name),
            decls: Vec::new(),
        }
    }
}

/// A set of files forming one package.
///
/// Files are keyed by path. The walker treats members as independent trees:
/// removing one member never affects its siblings or the package itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub files: BTreeMap<String, File>,
}

impl Package {
    pub fn new(files: BTreeMap<String, File>) -> Self {
        Self { files }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_constructor() {
        let file = File::new("main");
        assert_eq!(file.name.name, "main");
        assert!(file.decls.is_empty());
    }

    #[test]
    fn test_package_keys_are_ordered() {
        let mut files = BTreeMap::new();
        files.insert("b.src".to_string(), File::new("main"));
        files.insert("a.src".to_string(), File::new("main"));
        let package = Package::new(files);
        let keys: Vec<&str> = package.files.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a.src", "b.src"]);
    }
}
