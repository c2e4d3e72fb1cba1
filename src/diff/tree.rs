use std::fmt::Display;

use sqlparser::ast::{Cte, Query, Select, SetExpr, Statement, With};

use crate::diff::edit::{Edit, TreeDiff};

/// Compute the delta between `left` (answer) and `right` (ground truth).
///
/// Only changes are reported: no keep entries, no positional moves. The diff
/// descends into queries, set operations and SELECT clauses and reports the
/// smallest differing attribute; when two nodes differ in a way no finer
/// attribute explains, the whole node is reported as one update. Source
/// spans are ignored.
pub fn diff(left: &Statement, right: &Statement) -> TreeDiff {
    let mut edits = Vec::new();
    diff_statement(left, right, &mut edits);
    TreeDiff::from_edits(edits)
}

fn diff_statement(left: &Statement, right: &Statement, edits: &mut Vec<Edit>) {
    if left == right {
        return;
    }
    let before = edits.len();
    if let (Statement::Query(l), Statement::Query(r)) = (left, right) {
        diff_query("query", l, r, edits);
    }
    ensure_reported("statement", left, right, before, edits);
}

fn diff_query(path: &str, left: &Query, right: &Query, edits: &mut Vec<Edit>) {
    if left == right {
        return;
    }
    let before = edits.len();
    diff_option(&format!("{path}.with"), &left.with, &right.with, edits, diff_with);
    diff_set_expr(&format!("{path}.body"), &left.body, &right.body, edits);
    diff_option(
        &format!("{path}.order_by"),
        &left.order_by,
        &right.order_by,
        edits,
        diff_leaf,
    );
    ensure_reported(path, left, right, before, edits);
}

fn diff_with(path: &str, left: &With, right: &With, edits: &mut Vec<Edit>) {
    if left == right {
        return;
    }
    let before = edits.len();
    diff_list(
        &format!("{path}.ctes"),
        &left.cte_tables,
        &right.cte_tables,
        edits,
        diff_cte,
    );
    ensure_reported(path, left, right, before, edits);
}

fn diff_cte(path: &str, left: &Cte, right: &Cte, edits: &mut Vec<Edit>) {
    if left == right {
        return;
    }
    let before = edits.len();
    diff_leaf(&format!("{path}.alias"), &left.alias, &right.alias, edits);
    diff_query(&format!("{path}.query"), &left.query, &right.query, edits);
    ensure_reported(path, left, right, before, edits);
}

fn diff_set_expr(path: &str, left: &SetExpr, right: &SetExpr, edits: &mut Vec<Edit>) {
    if left == right {
        return;
    }
    let before = edits.len();
    match (left, right) {
        (SetExpr::Select(l), SetExpr::Select(r)) => {
            diff_select(&format!("{path}.select"), l, r, edits);
        }
        (SetExpr::Query(l), SetExpr::Query(r)) => {
            diff_query(&format!("{path}.query"), l, r, edits);
        }
        (
            SetExpr::SetOperation {
                op: l_op,
                set_quantifier: l_quantifier,
                left: l_left,
                right: l_right,
            },
            SetExpr::SetOperation {
                op: r_op,
                set_quantifier: r_quantifier,
                left: r_left,
                right: r_right,
            },
        ) => {
            if l_op != r_op || l_quantifier != r_quantifier {
                edits.push(Edit::Update {
                    path: format!("{path}.op"),
                    source: format!("{l_op} {l_quantifier}").trim_end().to_string(),
                    target: format!("{r_op} {r_quantifier}").trim_end().to_string(),
                });
            }
            diff_set_expr(&format!("{path}.left"), l_left, r_left, edits);
            diff_set_expr(&format!("{path}.right"), l_right, r_right, edits);
        }
        _ => {}
    }
    ensure_reported(path, left, right, before, edits);
}

fn diff_select(path: &str, left: &Select, right: &Select, edits: &mut Vec<Edit>) {
    if left == right {
        return;
    }
    let before = edits.len();
    diff_option(
        &format!("{path}.distinct"),
        &left.distinct,
        &right.distinct,
        edits,
        diff_leaf,
    );
    diff_list(
        &format!("{path}.projection"),
        &left.projection,
        &right.projection,
        edits,
        diff_leaf,
    );
    diff_list(&format!("{path}.from"), &left.from, &right.from, edits, diff_leaf);
    diff_option(
        &format!("{path}.selection"),
        &left.selection,
        &right.selection,
        edits,
        diff_leaf,
    );
    diff_leaf(
        &format!("{path}.group_by"),
        &left.group_by,
        &right.group_by,
        edits,
    );
    diff_option(
        &format!("{path}.having"),
        &left.having,
        &right.having,
        edits,
        diff_leaf,
    );
    diff_option(
        &format!("{path}.qualify"),
        &left.qualify,
        &right.qualify,
        edits,
        diff_leaf,
    );
    ensure_reported(path, left, right, before, edits);
}

/// Report a differing node as a single update.
fn diff_leaf<T: PartialEq + Display>(path: &str, left: &T, right: &T, edits: &mut Vec<Edit>) {
    if left != right {
        edits.push(Edit::Update {
            path: path.to_string(),
            source: left.to_string(),
            target: right.to_string(),
        });
    }
}

fn diff_option<T, F>(
    path: &str,
    left: &Option<T>,
    right: &Option<T>,
    edits: &mut Vec<Edit>,
    recurse: F,
) where
    T: PartialEq + Display,
    F: FnOnce(&str, &T, &T, &mut Vec<Edit>),
{
    match (left, right) {
        (Some(l), Some(r)) => recurse(path, l, r, edits),
        (Some(l), None) => edits.push(Edit::Remove {
            path: path.to_string(),
            node: l.to_string(),
        }),
        (None, Some(r)) => edits.push(Edit::Insert {
            path: path.to_string(),
            node: r.to_string(),
        }),
        (None, None) => {}
    }
}

/// Align two lists on their longest common subsequence.
///
/// Unmatched items become removals and insertions; within one gap between
/// matched items, removals and insertions are paired up and handed to
/// `recurse` as updates.
fn diff_list<T, F>(path: &str, left: &[T], right: &[T], edits: &mut Vec<Edit>, mut recurse: F)
where
    T: PartialEq + Display,
    F: FnMut(&str, &T, &T, &mut Vec<Edit>),
{
    if left == right {
        return;
    }

    let (n, m) = (left.len(), right.len());
    // lcs[i][j]: length of the common subsequence of left[i..] and right[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if left[i] == right[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut gap = Gap::default();
    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && left[i] == right[j] {
            gap.flush(path, left, right, edits, &mut recurse);
            i += 1;
            j += 1;
        } else if j < m && (i == n || lcs[i][j + 1] >= lcs[i + 1][j]) {
            gap.inserted.push(j);
            j += 1;
        } else {
            gap.removed.push(i);
            i += 1;
        }
    }
    gap.flush(path, left, right, edits, &mut recurse);
}

#[derive(Default)]
struct Gap {
    removed: Vec<usize>,
    inserted: Vec<usize>,
}

impl Gap {
    fn flush<T, F>(
        &mut self,
        path: &str,
        left: &[T],
        right: &[T],
        edits: &mut Vec<Edit>,
        recurse: &mut F,
    ) where
        T: Display,
        F: FnMut(&str, &T, &T, &mut Vec<Edit>),
    {
        let paired = self.removed.len().min(self.inserted.len());
        for (&i, &j) in self.removed.iter().zip(&self.inserted) {
            recurse(&format!("{path}[{j}]"), &left[i], &right[j], edits);
        }
        for &i in &self.removed[paired..] {
            edits.push(Edit::Remove {
                path: format!("{path}[{i}]"),
                node: left[i].to_string(),
            });
        }
        for &j in &self.inserted[paired..] {
            edits.push(Edit::Insert {
                path: format!("{path}[{j}]"),
                node: right[j].to_string(),
            });
        }
        self.removed.clear();
        self.inserted.clear();
    }
}

/// Fall back to a whole-node update when two nodes differ but no finer edit was found.
fn ensure_reported<T: Display>(
    path: &str,
    left: &T,
    right: &T,
    before: usize,
    edits: &mut Vec<Edit>,
) {
    if edits.len() == before {
        edits.push(Edit::Update {
            path: path.to_string(),
            source: left.to_string(),
            target: right.to_string(),
        });
    }
}
