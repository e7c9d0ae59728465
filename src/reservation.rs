pub use crate::schema::reservations;
use crate::{customer::Customer, essentials::*};

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use diesel::dsl::count_star;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = reservations)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    num_guests: i32,
    pub start_at: DateTime<Utc>,
    notes: String,
}

impl Reservation {
    pub fn num_guests(&self) -> i32 {
        self.num_guests
    }

    /// Fails with an invalid-input error for anything below 1 guest, before
    /// the value ever reaches the store
    pub fn set_num_guests(&mut self, num_guests: i32) -> Result<()> {
        self.num_guests = validate_num_guests(num_guests)?;
        Ok(())
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: Option<&str>) {
        self.notes = notes.unwrap_or("").to_string();
    }

    /// Long-date rendering of the start time, e.g. "August 7th 2026, 6:30 pm"
    pub fn formatted_start_at(&self) -> String {
        format!(
            "{} {} {}, {}",
            self.start_at.format("%B"),
            ordinal(self.start_at.day()),
            self.start_at.format("%Y"),
            self.start_at.format("%-I:%M %P"),
        )
    }

    /// All reservations held by the given customer, store default order
    pub fn for_customer(conn: &mut Conn, customer_id: i64) -> Result<Vec<Self>> {
        Ok(reservations::table
            .filter(reservations::customer_id.eq(customer_id))
            .select(Reservation::as_select())
            .load(conn)?)
    }

    /// Customer ids holding the most reservations, at most 10, busiest first
    pub fn top_customer_ids(conn: &mut Conn) -> Result<Vec<i64>> {
        let ids = reservations::table
            .group_by(reservations::customer_id)
            .order(count_star().desc())
            .limit(10)
            .select(reservations::customer_id)
            .load::<i64>(conn)?;

        if ids.is_empty() {
            log::warn!("no reservations to rank customers by");
            return Err(Error::Connection(
                "Unable to get top reservations list".to_owned(),
            ));
        }

        Ok(ids)
    }
}

/// Parse user-supplied date-time text, RFC 3339 or "2024-09-14 19:30"
pub fn parse_start_at(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            Error::InvalidInput("Reservation start time must be a valid date".to_owned())
        })
}

fn ordinal(day: u32) -> String {
    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };

    format!("{day}{suffix}")
}

fn validate_num_guests(num_guests: i32) -> Result<i32> {
    if num_guests < 1 {
        return Err(Error::InvalidInput(
            "A reservation requires at least 1 guest".to_owned(),
        ));
    }

    Ok(num_guests)
}

#[derive(Debug, Clone)]
pub struct NewReservation<'a> {
    pub customer_id: i64,
    pub num_guests: i32,
    pub start_at: DateTime<Utc>,
    pub notes: Option<&'a str>,
}

impl<'a> NewReservation<'a> {
    pub fn new(customer: &Customer, start_at: DateTime<Utc>) -> Self {
        Self {
            customer_id: customer.id,
            num_guests: 1,
            start_at,
            notes: None,
        }
    }

    pub fn save(self, conn: &mut Conn) -> Result<Reservation> {
        self.validate()?.save(conn)
    }

    fn validate(self) -> Result<ValidatedNewReservation<'a>> {
        validate_num_guests(self.num_guests)?;

        Ok(ValidatedNewReservation(InsertableReservation {
            customer_id: self.customer_id,
            num_guests: self.num_guests,
            start_at: self.start_at,
            notes: self.notes.unwrap_or(""),
        }))
    }
}

struct ValidatedNewReservation<'a>(InsertableReservation<'a>);

impl ValidatedNewReservation<'_> {
    fn save(self, conn: &mut Conn) -> Result<Reservation> {
        diesel::insert_into(reservations::table)
            .values(self.0)
            .returning(Reservation::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| Error::Connection("Unable to add new reservation".to_owned()))
    }
}

#[derive(Insertable)]
#[diesel(table_name = reservations)]
struct InsertableReservation<'a> {
    customer_id: i64,
    num_guests: i32,
    start_at: DateTime<Utc>,
    notes: &'a str,
}

#[derive(Default, Clone, AsChangeset)]
#[diesel(table_name = reservations)]
pub struct ChangeReservation<'a> {
    pub customer_id: Option<i64>,
    pub num_guests: Option<i32>,
    pub start_at: Option<DateTime<Utc>>,
    pub notes: Option<&'a str>,
}

impl ChangeReservation<'_> {
    pub fn save(self, conn: &mut Conn, reservation: &Reservation) -> Result<()> {
        self.validate()?;
        diesel::update(reservation).set(self).execute(conn)?;
        Ok(())
    }

    pub fn apply(self, conn: &mut Conn, reservation: &mut Reservation) -> Result<()> {
        self.clone().save(conn, reservation)?;

        if let Some(value) = self.customer_id {
            reservation.customer_id = value;
        }
        if let Some(value) = self.num_guests {
            reservation.num_guests = value;
        }
        if let Some(value) = self.start_at {
            reservation.start_at = value;
        }
        if let Some(value) = self.notes {
            reservation.notes = value.to_string();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if let Some(num_guests) = self.num_guests {
            validate_num_guests(num_guests)?;
        }

        Ok(())
    }
}
