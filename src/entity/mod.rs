pub mod prelude;

pub mod comment;
pub mod post;
pub mod post_tag;
pub mod product;
pub mod product_tag;
pub mod tag;
pub mod user;

use sea_orm::{ActiveValue, DbErr};

/// Rejects a string longer than its column width. SQLite does not enforce
/// `VARCHAR(n)`, so the bound is checked in `before_save`, which runs for
/// `ActiveModel` insert, update and save only. Bulk `insert_many` and
/// `update_many` bypass it.
pub(crate) fn check_len(
    table: &str,
    column: &str,
    value: &ActiveValue<String>,
    max: usize,
) -> Result<(), DbErr> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) if v.chars().count() > max => Err(
            DbErr::Custom(format!("{table}.{column} exceeds {max} characters")),
        ),
        _ => Ok(()),
    }
}
