pub mod artists;
pub mod shows;
pub mod status;
pub mod venues;
