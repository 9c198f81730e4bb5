mod database;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::{Config, DEFAULT_MASTER_KEY, MASTER_KEY_HEADER};
