use serde::Serialize;
use std::fmt;

/// One attribute-level change between the answer tree and the ground-truth tree.
///
/// `path` is a dotted route from the statement root, e.g.
/// `query.body.select.projection[1]`; list indices refer to the side that
/// holds the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    /// Node present only in the ground truth.
    Insert {
        /// Location in the ground-truth tree.
        path: String,
        /// SQL rendering of the inserted node.
        node: String,
    },
    /// Node present only in the answer.
    Remove {
        /// Location in the answer tree.
        path: String,
        /// SQL rendering of the removed node.
        node: String,
    },
    /// Node present on both sides with different content.
    Update {
        /// Location of the node.
        path: String,
        /// SQL rendering in the answer.
        source: String,
        /// SQL rendering in the ground truth.
        target: String,
    },
}

impl Edit {
    /// Dotted location of the edit.
    pub fn path(&self) -> &str {
        match self {
            Edit::Insert { path, .. } | Edit::Remove { path, .. } | Edit::Update { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Insert { path, node } => write!(f, "+ {path}: {node}"),
            Edit::Remove { path, node } => write!(f, "- {path}: {node}"),
            Edit::Update {
                path,
                source,
                target,
            } => write!(f, "~ {path}: {source} -> {target}"),
        }
    }
}

/// Ordered list of edits turning the answer tree into the ground-truth tree.
///
/// Empty exactly when the two trees are structurally equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TreeDiff {
    edits: Vec<Edit>,
}

impl TreeDiff {
    pub(crate) fn from_edits(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    /// True when no edit was found.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Edits in discovery order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Consume the diff, returning its edits.
    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}

impl fmt::Display for TreeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, edit) in self.edits.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{edit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_render_with_kind_markers() {
        let diff = TreeDiff::from_edits(vec![
            Edit::Update {
                path: "query.body.select.selection".to_string(),
                source: "x = 1".to_string(),
                target: "x = 2".to_string(),
            },
            Edit::Insert {
                path: "query.body.select.projection[1]".to_string(),
                node: "b".to_string(),
            },
            Edit::Remove {
                path: "query.order_by".to_string(),
                node: "ORDER BY a".to_string(),
            },
        ]);

        insta::assert_snapshot!(diff.to_string(), @r"
        ~ query.body.select.selection: x = 1 -> x = 2
        + query.body.select.projection[1]: b
        - query.order_by: ORDER BY a
        ");
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.edits()[1].path(), "query.body.select.projection[1]");
    }

    #[test]
    fn edits_serialize_with_kind_tag() {
        let edit = Edit::Insert {
            path: "query.body.select.projection[0]".to_string(),
            node: "a".to_string(),
        };
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "insert",
                "path": "query.body.select.projection[0]",
                "node": "a",
            })
        );
    }
}
