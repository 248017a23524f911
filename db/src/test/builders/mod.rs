mod artist_builder;
mod show_builder;
mod venue_builder;

pub use self::artist_builder::ArtistBuilder;
pub use self::show_builder::ShowBuilder;
pub use self::venue_builder::VenueBuilder;
