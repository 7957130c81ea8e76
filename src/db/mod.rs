//! Database layer: pool, user repositories (PostgreSQL and in-memory), fixtures.

mod fixtures;
mod memory;
mod pool;
mod repositories;

pub use fixtures::{seed_users, FIXTURE_PASSWORD, FIXTURE_USERNAMES};
pub use memory::MemoryUserRepository;
pub use pool::{create_pool, run_migrations, DbPool};
pub use repositories::*;
