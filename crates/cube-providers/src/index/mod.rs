//! Index Driver Implementations
//!
//! | Driver | Aliases | Backend |
//! |--------|---------|---------|
//! | [`PostgresIndexDriver`] | `postgres` | PostgreSQL |

#[cfg(feature = "index-postgres")]
pub mod postgres;

#[cfg(feature = "index-postgres")]
pub use postgres::{ConnectionSettings, PostgresIndex, PostgresIndexDriver};
