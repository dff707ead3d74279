//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for one table.
//! Identifiers come from resource definitions only; values are always `?` parameters.

/// Identity column shared by every resource table.
pub const ID_COLUMN: &str = "id";

/// Quote identifier for SQLite (safe: only from resource definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `"id", "col1", ...`
fn select_column_list(columns: &[&str]) -> String {
    std::iter::once(ID_COLUMN)
        .chain(columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT all rows ordered by id. When `limited`, caller binds the limit as sole param.
pub fn select_list(table: &str, columns: &[&str], limited: bool) -> String {
    let mut sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    );
    if limited {
        sql.push_str(" LIMIT ?");
    }
    sql
}

/// SELECT by id. Caller binds id as sole param.
pub fn select_by_id(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// INSERT of the attribute columns; storage assigns the id. Caller binds columns in order.
pub fn insert(table: &str, columns: &[&str]) -> String {
    if columns.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES", quoted(table));
    }
    let cols = columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", quoted(table), cols, placeholders)
}

/// UPDATE of the attribute columns by id. Caller binds columns in order, then id.
pub fn update(table: &str, columns: &[&str]) -> String {
    let set = if columns.is_empty() {
        format!("{0} = {0}", quoted(ID_COLUMN))
    } else {
        columns
            .iter()
            .map(|c| format!("{} = ?", quoted(c)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("UPDATE {} SET {} WHERE {} = ?", quoted(table), set, quoted(ID_COLUMN))
}

/// DELETE by id. Caller binds id as sole param.
pub fn delete(table: &str) -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(table), quoted(ID_COLUMN))
}
