use std::ops::ControlFlow;

use sqlparser::ast::{Expr, Query, SelectItem, SetExpr, Statement, VisitMut, VisitorMut};

use crate::parser::names::fold_object_name;

/// Sort the projection of every SELECT in `statement` by its SQL rendering.
///
/// Covers subqueries, derived tables, CTE bodies and both sides of set
/// operations. Unquoted function names are lowercased first, so `COUNT(*)`
/// and `count(*)` compare and sort alike. Inner queries are sorted before
/// the queries that contain them, so sort keys are always computed from
/// canonical text and a second pass is a no-op. `SELECT *` is left as-is.
pub fn canonicalize(statement: &mut Statement) -> &mut Statement {
    let _ = statement.visit(&mut Canonicalizer);
    statement
}

/// By-value form of [`canonicalize`].
pub fn canonicalized(mut statement: Statement) -> Statement {
    canonicalize(&mut statement);
    statement
}

/// Stable sort of a projection by each item's rendering; ties keep their order.
pub fn sort_projection(projection: &mut [SelectItem]) {
    projection.sort_by_cached_key(ToString::to_string);
}

struct Canonicalizer;

impl VisitorMut for Canonicalizer {
    type Break = ();

    // Expressions are visited before the enclosing query's post hook.
    fn pre_visit_expr(&mut self, expr: &mut Expr) -> ControlFlow<Self::Break> {
        if let Expr::Function(function) = expr {
            fold_object_name(&mut function.name);
        }
        ControlFlow::Continue(())
    }

    fn post_visit_query(&mut self, query: &mut Query) -> ControlFlow<Self::Break> {
        sort_set_expr(&mut query.body);
        ControlFlow::Continue(())
    }
}

// Nested `SetExpr::Query` bodies are visited as queries of their own.
fn sort_set_expr(body: &mut SetExpr) {
    match body {
        SetExpr::Select(select) => sort_projection(&mut select.projection),
        SetExpr::SetOperation { left, right, .. } => {
            sort_set_expr(left);
            sort_set_expr(right);
        }
        _ => {}
    }
}
