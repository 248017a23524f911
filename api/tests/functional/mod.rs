mod database_transaction;
mod shows;
mod venues;
