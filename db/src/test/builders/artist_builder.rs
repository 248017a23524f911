use diesel::prelude::*;
use models::*;

pub struct ArtistBuilder<'a> {
    name: String,
    city: String,
    state: String,
    image_url: Option<String>,
    connection: &'a PgConnection,
}

impl<'a> ArtistBuilder<'a> {
    pub fn new(connection: &PgConnection) -> ArtistBuilder {
        ArtistBuilder {
            connection,
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            image_url: None,
        }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn finish(self) -> Artist {
        let mut artist = Artist::create(&self.name, &self.city, &self.state);
        artist.image_url = self.image_url;
        artist.commit(self.connection).unwrap()
    }
}
