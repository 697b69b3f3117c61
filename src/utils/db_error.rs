//! Classification of database driver errors.

/// Returns true if the error is a uniqueness violation on the `urls.alias` column.
///
/// SQLite reports these as `UNIQUE constraint failed: urls.alias`.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("urls.alias")
}
