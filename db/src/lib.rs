#[macro_use]
extern crate diesel;
extern crate chrono;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
extern crate uuid;
#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate validator_derive;
extern crate validator;

pub mod models;
pub mod schema;
pub mod test;
pub mod utils;

pub mod prelude {
    pub use models::*;
    pub use utils::errors::*;
}
