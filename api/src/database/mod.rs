pub use self::connection::*;
pub use self::connection_type::*;
pub use self::database::*;

mod connection;
mod connection_type;
mod database;
