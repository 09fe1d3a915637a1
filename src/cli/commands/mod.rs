pub mod backup;
pub mod config;
pub mod db;
pub mod employee;
pub mod export;
pub mod init;
pub mod log;
pub mod ticket;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Open the configured database, bringing its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
