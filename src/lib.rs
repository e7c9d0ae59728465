pub mod customer;
pub mod database;
pub mod reservation;
pub mod result;
pub mod schema;
pub mod search;

mod test;

pub use customer::Customer;
pub use reservation::Reservation;
pub use result::{Error, Result};

pub type Conn = diesel::sqlite::SqliteConnection;

pub(crate) mod essentials {
    pub use crate::result::{Error, OptionalExtension, Result};
    pub use crate::Conn;
}
