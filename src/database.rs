use crate::essentials::*;

use std::path::Path;

use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn open<T: AsRef<Path>>(path: T) -> Result<Conn> {
    let path = path.as_ref();
    log::debug!("Opening database {}", path.display());

    setup(SqliteConnection::establish(path.to_string_lossy().as_ref())?)
}

pub fn memory() -> Result<Conn> {
    setup(SqliteConnection::establish(":memory:")?)
}

fn setup(mut conn: Conn) -> Result<Conn> {
    for version in conn.run_pending_migrations(MIGRATIONS)? {
        log::info!("Ran migration {}", version);
    }

    Ok(conn)
}
