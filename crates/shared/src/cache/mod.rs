mod memory;
mod session;

pub use self::memory::MemorySessionStore;
pub use self::session::RedisSessionStore;
