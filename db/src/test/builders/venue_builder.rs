use diesel::prelude::*;
use models::*;

pub struct VenueBuilder<'a> {
    name: String,
    city: String,
    state: String,
    address: String,
    seeking_talent: bool,
    connection: &'a PgConnection,
}

impl<'a> VenueBuilder<'a> {
    pub fn new(connection: &PgConnection) -> VenueBuilder {
        VenueBuilder {
            connection,
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            seeking_talent: false,
        }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    pub fn with_city(mut self, city: String) -> Self {
        self.city = city;
        self
    }

    pub fn with_state(mut self, state: String) -> Self {
        self.state = state;
        self
    }

    pub fn with_address(mut self, address: String) -> Self {
        self.address = address;
        self
    }

    pub fn seeking_talent(mut self) -> Self {
        self.seeking_talent = true;
        self
    }

    pub fn finish(self) -> Venue {
        let mut venue = Venue::create(&self.name, &self.city, &self.state, &self.address);
        venue.seeking_talent = self.seeking_talent;
        venue.commit(self.connection).unwrap()
    }
}
