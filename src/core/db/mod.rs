/// Database Wrapper Module
///
/// A thin, synchronous access layer over a MySQL-protocol store. Two pieces:
/// connection management (one explicit, caller-owned handle with open/close
/// semantics) and query execution (one statement per call, rows out or last
/// insert id out). No pooling, no transactions, no retry.

pub mod connection;
pub mod query;

pub use connection::ConnectionManager;
pub use query::{QueryExecutor, QueryOutcome, RowMap, StatementKind};
