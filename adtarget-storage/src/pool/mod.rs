//! Connection management.
//!
//! A single mutex-guarded connection serves both reads and writes.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
