/// Query Execution Module
///
/// Runs one statement at a time against an open connection. Reads come back
/// as ordered column-name-to-value maps; writes come back as the last insert
/// id. The classifying `execute_query` entry point mirrors the historical
/// contract, while `fetch_all`/`execute` let callers state the operation kind
/// explicitly.

use crate::core::{Result, UpdatesError};
use mysql::prelude::Queryable;
use mysql::{Conn, Params, Row, Value};
use serde_json::Value as JsonValue;
use tracing::error;

/// One result row: an ordered mapping from column name to value.
pub type RowMap = serde_json::Map<String, JsonValue>;

/// Outcome of a classified statement execution.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// A read: every row of the result set, in result order.
    Rows(Vec<RowMap>),
    /// A write, durable when the call returns. `last_insert_id` is the
    /// auto-generated key of the last inserted row, zero when the statement
    /// inserted nothing.
    Committed { last_insert_id: u64 },
}

/// Query execution service that borrows an open connection.
///
/// One statement per call; the per-call result set is released before the
/// call returns, on success and on error alike, so the wire stays consistent
/// for the next call.
pub struct QueryExecutor<'a> {
    conn: &'a mut Conn,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new QueryExecutor for the given connection.
    pub fn new(conn: &'a mut Conn) -> Self {
        QueryExecutor { conn }
    }

    /// Executes a statement, routing on its leading keyword.
    ///
    /// `SELECT` statements fetch all rows; everything else executes under
    /// autocommit and reports the last insert id. `params` are positional
    /// bindings for `?` placeholders; pass `()` when the statement has none.
    ///
    /// # Errors
    ///
    /// Returns `UpdatesError::Query` if preparation or execution fails. The
    /// connection itself stays usable.
    pub fn execute_query<P>(&mut self, sql: &str, params: P) -> Result<QueryOutcome>
    where
        P: Into<Params>,
    {
        match StatementKind::from_sql(sql) {
            StatementKind::Select => Ok(QueryOutcome::Rows(self.fetch_all(sql, params)?)),
            _ => {
                let last_insert_id = self.execute(sql, params)?;
                Ok(QueryOutcome::Committed { last_insert_id })
            }
        }
    }

    /// Legacy entry point: any execution error is logged and converted to an
    /// absent result. Callers that need to distinguish an empty result from
    /// a failure should use `execute_query` instead.
    pub fn execute_query_logged<P>(&mut self, sql: &str, params: P) -> Option<QueryOutcome>
    where
        P: Into<Params>,
    {
        match self.execute_query(sql, params) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(error = %e, "error executing query");
                None
            }
        }
    }

    /// Runs a read and fetches every row of the result set.
    ///
    /// Any further result sets from multi-statement execution are drained
    /// before this returns.
    pub fn fetch_all<P>(&mut self, sql: &str, params: P) -> Result<Vec<RowMap>>
    where
        P: Into<Params>,
    {
        let rows: Vec<Row> = self
            .conn
            .exec(sql, params)
            .map_err(|e| UpdatesError::Query(format!("Query execution failed: {e}")))?;
        Ok(rows.into_iter().map(row_to_map).collect())
    }

    /// Runs a write and reports the auto-generated id of the last inserted
    /// row (zero for statements that insert nothing).
    pub fn execute<P>(&mut self, sql: &str, params: P) -> Result<u64>
    where
        P: Into<Params>,
    {
        let result = self
            .conn
            .exec_iter(sql, params)
            .map_err(|e| UpdatesError::Query(format!("Query execution failed: {e}")))?;
        let last_insert_id = result.last_insert_id().unwrap_or(0);
        // Dropping the result drains anything still on the wire.
        Ok(last_insert_id)
    }
}

/// Converts a driver row into an ordered column-name-to-value map.
fn row_to_map(row: Row) -> RowMap {
    let columns = row.columns();
    let mut map = RowMap::new();
    for (column, value) in columns.iter().zip(row.unwrap()) {
        map.insert(column.name_str().into_owned(), value_to_json(value));
    }
    map
}

/// Converts a driver value into a JSON value.
///
/// Text comes through the wire as bytes; valid UTF-8 becomes a string and
/// anything else is summarized instead of dumped. Temporal values are
/// formatted as SQL literals.
fn value_to_json(value: Value) -> JsonValue {
    match value {
        Value::NULL => JsonValue::Null,
        Value::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(text) => JsonValue::String(text),
            Err(e) => JsonValue::String(format!("<BLOB: {} bytes>", e.as_bytes().len())),
        },
        Value::Int(i) => JsonValue::from(i),
        Value::UInt(u) => JsonValue::from(u),
        Value::Float(f) => json_number(f as f64),
        Value::Double(d) => json_number(d),
        Value::Date(year, month, day, hour, minute, second, micros) => {
            JsonValue::String(format_date(year, month, day, hour, minute, second, micros))
        }
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            JsonValue::String(format_time(negative, days, hours, minutes, seconds, micros))
        }
    }
}

fn json_number(value: f64) -> JsonValue {
    serde_json::Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn format_date(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    micros: u32,
) -> String {
    let mut text = format!("{year:04}-{month:02}-{day:02}");
    if hour != 0 || minute != 0 || second != 0 || micros != 0 {
        text.push_str(&format!(" {hour:02}:{minute:02}:{second:02}"));
        if micros != 0 {
            text.push_str(&format!(".{micros:06}"));
        }
    }
    text
}

fn format_time(negative: bool, days: u32, hours: u8, minutes: u8, seconds: u8, micros: u32) -> String {
    let sign = if negative { "-" } else { "" };
    let total_hours = u64::from(days) * 24 + u64::from(hours);
    let mut text = format!("{sign}{total_hours:02}:{minutes:02}:{seconds:02}");
    if micros != 0 {
        text.push_str(&format!(".{micros:06}"));
    }
    text
}

/// Statement classification by leading keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatementKind {
    /// SELECT statement
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
    /// CREATE statement
    Create,
    /// DROP statement
    Drop,
    /// ALTER statement
    Alter,
    /// Other statement types
    Other,
}

impl StatementKind {
    /// Classifies a statement by its trimmed, case-folded leading keyword.
    pub fn from_sql(sql: &str) -> Self {
        let sql_upper = sql.trim().to_uppercase();

        if sql_upper.starts_with("SELECT") {
            StatementKind::Select
        } else if sql_upper.starts_with("INSERT") {
            StatementKind::Insert
        } else if sql_upper.starts_with("UPDATE") {
            StatementKind::Update
        } else if sql_upper.starts_with("DELETE") {
            StatementKind::Delete
        } else if sql_upper.starts_with("CREATE") {
            StatementKind::Create
        } else if sql_upper.starts_with("DROP") {
            StatementKind::Drop
        } else if sql_upper.starts_with("ALTER") {
            StatementKind::Alter
        } else {
            StatementKind::Other
        }
    }
}
