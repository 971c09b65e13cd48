//! Shared harness for integration tests: a migrated on-disk SQLite
//! database that cleans up after itself.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use catalog_admin::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests. Each test gets its own
/// file so tests can run in parallel; the file and its WAL sidecars are
/// removed on drop.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        // A leftover from an aborted run would leak state into this one.
        std::fs::remove_file(filename).ok();

        let pool = establish_connection_pool(filename)
            .expect("failed to open the test database");
        let mut conn = pool
            .get()
            .expect("failed to check out a test connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}
