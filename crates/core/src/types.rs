/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a store identifier as it appears in a URL path or form field.
///
/// Identifiers are positive decimal integers. Anything else (empty, signed,
/// non-numeric, out of range) yields `None`.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}
