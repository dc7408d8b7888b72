mod database;
mod myconfig;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::{CatalogueBackend, Config, DatabaseConfig, SessionBackend, SessionConfig};
pub use self::redis::{RedisConfig, RedisPool};
