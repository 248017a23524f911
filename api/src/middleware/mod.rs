pub use self::database_transaction::*;

mod database_transaction;
