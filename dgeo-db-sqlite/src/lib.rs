#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::{AnsiTransactionManager, SimpleConnection as _, TransactionManager as _},
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness as _};
use dgeo_core::{repositories as repo, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc, time::Duration};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// How long a writer waits for a lock held by another process.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

// SQLite forgets these settings when a connection is closed,
// so they are applied to every connection of the pool.
#[derive(Debug)]
struct ConnectionSettings {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// A SQLite database file behind a connection pool.
///
/// Any number of read-only sessions may be open at the same
/// time. A read-write session excludes all other sessions
/// of this process.
#[derive(Clone)]
pub struct Database {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Database {
    pub fn open(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 would retry an inaccessible file silently
        use diesel::Connection as _;
        let mut conn = SqliteConnection::establish(url)?;
        // Stored in the database file
        conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA encoding = 'UTF-8';")?;
        drop(conn);

        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionSettings {
                busy_timeout: DEFAULT_BUSY_TIMEOUT,
            }))
            .build(ConnectionManager::new(url))?;
        log::debug!("Opened database {url} with up to {pool_size} connection(s)");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn read_only(&self) -> Fallible<Db<'_>> {
        Db::acquire(PoolLock::Shared(self.pool.read()))
    }

    pub fn read_write(&self) -> Fallible<Db<'_>> {
        Db::acquire(PoolLock::Exclusive(self.pool.write()))
    }

    /// Applies all pending embedded migrations.
    pub fn migrate(&self) -> Fallible<()> {
        let db = self.read_write()?;
        let mut conn = db.conn.borrow_mut();
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
        if applied.is_empty() {
            log::debug!("Database schema is up to date");
        }
        for version in applied {
            log::info!("Applied database migration {version}");
        }
        Ok(())
    }
}

enum PoolLock<'a> {
    Shared(RwLockReadGuard<'a, ConnectionPool>),
    Exclusive(RwLockWriteGuard<'a, ConnectionPool>),
}

/// A session on a single pooled connection.
///
/// Implements all repositories. Writes through a read-only
/// session are rejected.
pub struct Db<'a> {
    conn: RefCell<PooledConnection>,
    lock: PoolLock<'a>,
}

impl<'a> Db<'a> {
    fn acquire(lock: PoolLock<'a>) -> Fallible<Self> {
        let pool: &ConnectionPool = match &lock {
            PoolLock::Shared(pool) => pool,
            PoolLock::Exclusive(pool) => pool,
        };
        let conn = pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection: {err}");
        })?;
        Ok(Self {
            conn: RefCell::new(conn),
            lock,
        })
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.lock, PoolLock::Shared(_))
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, repo::Error>,
    ) -> Result<T, repo::Error> {
        let mut conn = self.conn.borrow_mut();
        f(&mut **conn)
    }

    fn with_writable_conn<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, repo::Error>,
    ) -> Result<T, repo::Error> {
        if self.is_read_only() {
            return Err(repo_impl::read_only_err());
        }
        self.with_conn(f)
    }

    /// Runs a use case on this session within a transaction.
    ///
    /// If the use case fails all of its changes are rolled back.
    pub fn transaction<T, E>(&self, f: impl FnOnce(&Self) -> Result<T, E>) -> Result<T, uc::Error>
    where
        E: Into<uc::Error>,
    {
        self.with_writable_conn(|conn| {
            AnsiTransactionManager::begin_transaction(conn).map_err(repo_impl::from_diesel_err)
        })?;
        match f(self).map_err(Into::into) {
            Ok(value) => {
                self.with_conn(|conn| {
                    AnsiTransactionManager::commit_transaction(conn)
                        .map_err(repo_impl::from_diesel_err)
                })?;
                Ok(value)
            }
            Err(err) => {
                let rollback = self.with_conn(|conn| {
                    AnsiTransactionManager::rollback_transaction(conn)
                        .map_err(repo_impl::from_diesel_err)
                });
                if let Err(rollback_err) = rollback {
                    log::error!("Failed to roll back transaction: {rollback_err}");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn in_memory_db() -> Database {
        // A single connection, otherwise every connection
        // would open its own in-memory database
        let db = Database::open(":memory:", 1).unwrap();
        db.migrate().unwrap();
        db
    }

    #[test]
    fn migrations_can_be_run_repeatedly() {
        let db = in_memory_db();
        db.migrate().unwrap();
    }

    #[test]
    fn sessions_know_their_access_mode() {
        let db = in_memory_db();
        assert!(db.read_only().unwrap().is_read_only());
        assert!(!db.read_write().unwrap().is_read_only());
    }

    #[test]
    fn pooled_connections_check_foreign_keys() {
        let db = in_memory_db();
        let session = db.read_write().unwrap();
        let enabled = session
            .with_conn(|conn| {
                use diesel::RunQueryDsl as _;
                diesel::sql_query("PRAGMA foreign_keys")
                    .load::<ForeignKeys>(conn)
                    .map_err(repo_impl::from_diesel_err)
            })
            .unwrap();
        assert_eq!(1, enabled[0].foreign_keys);
    }

    #[derive(QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    #[test]
    fn transactions_need_write_access() {
        let db = in_memory_db();
        let session = db.read_only().unwrap();
        let res = session.transaction(|_| Ok::<_, uc::Error>(()));
        assert!(matches!(res, Err(uc::Error::Repo(repo::Error::Other(_)))));
    }
}
