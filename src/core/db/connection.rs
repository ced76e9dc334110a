/// Connection Management Module
///
/// Owns the single MySQL session used by the database wrapper. The manager is
/// an explicit value: callers construct it, open it, borrow an executor from
/// it, and close it. There is no hidden process-wide handle and therefore no
/// locking; `&mut self` on every operation enforces the single-caller model.

use crate::config::DbConfig;
use crate::core::db::query::QueryExecutor;
use crate::core::{Result, UpdatesError};
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder, SslOpts};
use tracing::{debug, error, warn};

/// Connection manager for database operations.
///
/// Holds at most one live handle. The handle is absent until `connect`
/// succeeds and absent again after `disconnect` (or after a failed connect).
pub struct ConnectionManager {
    config: DbConfig,
    conn: Option<Conn>,
}

impl ConnectionManager {
    /// Creates a manager for the given target. Never touches the network.
    pub fn new(config: DbConfig) -> Self {
        ConnectionManager { config, conn: None }
    }

    /// Creates a manager configured from `DB_*` environment variables.
    pub fn from_env() -> Self {
        ConnectionManager::new(DbConfig::from_env())
    }

    /// Establishes a session to the configured host/port/database.
    ///
    /// The session is pinned to `utf8mb4` with a Unicode collation via an
    /// init statement, TLS negotiation is disabled, and TCP is forced even
    /// for local targets. On failure the handle stays absent and the driver
    /// error is returned.
    ///
    /// Reconnecting an already-open manager closes the previous session
    /// first, so at most one handle is ever live.
    pub fn connect(&mut self) -> Result<()> {
        if self.conn.is_some() {
            warn!("connect called on an open manager; closing previous session");
            self.disconnect();
        }

        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(self.config.host.as_str()))
            .tcp_port(self.config.port)
            .user(Some(self.config.user.as_str()))
            .pass(Some(self.config.password.as_str()))
            .db_name(Some(self.config.database.as_str()))
            .prefer_socket(false)
            .ssl_opts(None::<SslOpts>)
            .init(vec!["SET NAMES utf8mb4 COLLATE utf8mb4_unicode_ci"]);

        let conn = Conn::new(opts)?;
        debug!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.database,
            "database session opened"
        );
        self.conn = Some(conn);
        Ok(())
    }

    /// Legacy entry point: logs connection failures instead of returning
    /// them. Reports whether the session is open afterwards.
    pub fn connect_logged(&mut self) -> bool {
        match self.connect() {
            Ok(()) => true,
            Err(e) => {
                error!(
                    host = %self.config.host,
                    port = self.config.port,
                    database = %self.config.database,
                    error = %e,
                    "error connecting to MySQL"
                );
                false
            }
        }
    }

    /// Closes the session if one is open. Idempotent: safe on a never-opened
    /// or already-closed manager, any number of times.
    ///
    /// A live session answers a final ping before teardown; dropping the
    /// handle drains any unread result set and sends the protocol quit
    /// command. The handle field is cleared unconditionally.
    pub fn disconnect(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            if conn.ping().is_ok() {
                debug!("closing database session");
            } else {
                warn!("database session was already dead at close");
            }
        }
    }

    /// Whether a handle is currently held.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Borrows the live handle as a query executor.
    ///
    /// Fails with `NotConnected` while closed; there is no implicit
    /// reconnect.
    pub fn executor(&mut self) -> Result<QueryExecutor<'_>> {
        match self.conn.as_mut() {
            Some(conn) => Ok(QueryExecutor::new(conn)),
            None => Err(UpdatesError::NotConnected),
        }
    }

    /// The target this manager was configured for.
    pub fn config(&self) -> &DbConfig {
        &self.config
    }
}
