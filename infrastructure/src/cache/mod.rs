//! Response cache backends

pub mod memory;
pub mod redis;

pub use memory::InMemoryResponseCache;
pub use self::redis::RedisResponseCache;
