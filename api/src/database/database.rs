use crate::config::Config;
use crate::database::{Connection, ConnectionType};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use r2d2::Error as R2D2Error;

type R2D2Pool = Pool<ConnectionManager<PgConnection>>;

pub struct Database {
    pg_connection_pool: R2D2Pool,
}

impl Database {
    pub fn from_config(config: &Config) -> Database {
        Database {
            pg_connection_pool: create_connection_pool(config, config.database_url.clone()),
        }
    }

    pub fn get_connection(&self) -> Result<Connection, R2D2Error> {
        let conn = self.pg_connection_pool.get()?;
        Ok(ConnectionType::R2D2(conn).into())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Database {
            pg_connection_pool: self.pg_connection_pool.clone(),
        }
    }
}

fn create_connection_pool(config: &Config, database_url: String) -> R2D2Pool {
    let connection_manager = ConnectionManager::new(database_url);

    Pool::builder()
        .min_idle(Some(config.connection_pool.min))
        .max_size(config.connection_pool.max)
        .build(connection_manager)
        .expect("Failed to create connection pool.")
}
