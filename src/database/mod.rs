pub mod connector;
pub mod models;
pub mod schema;
pub mod unit_of_work;

pub use connector::{DB, connect_with_settings, ping};
pub use unit_of_work::UnitOfWork;
