//! Case-insensitive substring search over a fixed set of columns.

use sea_orm::sea_query::{Alias, Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::Condition;

const ESCAPE: char = '\\';

/// An empty search string means "no search".
pub fn term(search: Option<&str>) -> Option<&str> {
    search.filter(|s| !s.is_empty())
}

/// `%term%` lowercased, with LIKE wildcards in the term matched literally.
pub fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | ESCAPE) {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// `LOWER(col)`
pub fn lowered<T: IntoColumnRef>(col: T) -> SimpleExpr {
    Func::lower(Expr::col(col)).into()
}

/// `LOWER(CAST(col AS TEXT))`, for numeric columns.
pub fn lowered_text<T: IntoColumnRef>(col: T) -> SimpleExpr {
    Func::lower(Func::cast_as(Expr::col(col), Alias::new("TEXT"))).into()
}

/// OR of `expr LIKE %term%` over every expression.
pub fn matches_any<I>(exprs: I, term: &str) -> Condition
where
    I: IntoIterator<Item = SimpleExpr>,
{
    let pattern = like_pattern(term);
    exprs.into_iter().fold(Condition::any(), |cond, e| {
        cond.add(Expr::expr(e).like(LikeExpr::new(pattern.clone()).escape(ESCAPE)))
    })
}
