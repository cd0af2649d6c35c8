//! Connection management: pragmas and the single write connection.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
