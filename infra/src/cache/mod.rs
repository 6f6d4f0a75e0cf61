//! Cache module for Redis-based storage
//!
//! Provides a Redis client with retry logic and an OTP store that keeps
//! verification codes in Redis so several API instances can share them.

pub mod redis_client;
pub mod redis_otp_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use redis_otp_store::RedisOtpStore;

// Re-export commonly used types
pub use rb_shared::config::CacheConfig;
