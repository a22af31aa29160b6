//! Database bootstrap for tests that need real connections.
//!
//! Nothing in payload generation depends on this module.
//!
//! ```rust,no_run
//! use fixturegen::persistence::DualConnection;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let conns = DualConnection::connect(
//!         "postgres://reader@localhost/app",
//!         "postgres://writer@localhost/app",
//!     )
//!     .await?;
//!     conns.close().await?;
//!     Ok(())
//! }
//! ```

pub mod dual_connection;
pub mod error;

pub use dual_connection::DualConnection;
pub use error::PersistenceError;
