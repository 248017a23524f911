use api::config::{Config, Environment};
use api::database::Connection;
use db::test::builders::*;
use diesel::Connection as DieselConnection;
use diesel::PgConnection;

#[derive(Clone)]
pub struct TestDatabase {
    pub connection: Connection,
}

#[allow(dead_code)]
impl TestDatabase {
    pub fn new() -> TestDatabase {
        let config = Config::new(Environment::Test);

        let connection = PgConnection::establish(&config.database_url)
            .unwrap_or_else(|_| panic!("Connection to {} could not be established.", config.database_url));

        connection.begin_test_transaction().unwrap();

        TestDatabase {
            connection: connection.into(),
        }
    }

    pub fn create_venue(&self) -> VenueBuilder {
        VenueBuilder::new(self.connection.get())
    }

    pub fn create_artist(&self) -> ArtistBuilder {
        ArtistBuilder::new(self.connection.get())
    }

    pub fn create_show(&self) -> ShowBuilder {
        ShowBuilder::new(self.connection.get())
    }
}
