#![cfg(test)]

use crate::{
    customer::NewCustomer, reservation::NewReservation, schema::reservations, Conn, Customer,
    Reservation,
};

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use diesel::prelude::*;

pub mod prelude {
    pub(crate) use crate::test::{self, Reload};
    pub use anyhow::Result;
    pub use pretty_assertions::{assert_eq, assert_ne};
}

pub trait Reload: Sized {
    fn reload(&mut self, conn: &mut Conn) -> Result<&mut Self>;
}

impl Reload for Customer {
    fn reload(&mut self, conn: &mut Conn) -> Result<&mut Self> {
        *self = Customer::find(conn, self.id)?;
        Ok(self)
    }
}

impl Reload for Reservation {
    fn reload(&mut self, conn: &mut Conn) -> Result<&mut Self> {
        *self = reservations::table
            .find(self.id)
            .select(Reservation::as_select())
            .first(conn)?;
        Ok(self)
    }
}

pub fn db() -> Result<Conn> {
    Ok(crate::database::memory()?)
}

pub fn customer(conn: &mut Conn, first_name: &str, last_name: &str) -> Result<Customer> {
    Ok(NewCustomer::new(first_name, last_name).save(conn)?)
}

pub fn reservation(conn: &mut Conn, customer: &Customer) -> Result<Reservation> {
    Ok(NewReservation::new(customer, start_at(2024, 9, 14, 19, 30)).save(conn)?)
}

pub fn start_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}
