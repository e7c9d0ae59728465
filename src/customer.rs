pub use crate::schema::customers;
use crate::{essentials::*, reservation::Reservation, search};

use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Every customer, ordered by last name then first name
    pub fn all(conn: &mut Conn) -> Result<Vec<Self>> {
        Ok(customers::table
            .order((customers::last_name.asc(), customers::first_name.asc()))
            .select(Customer::as_select())
            .load(conn)?)
    }

    pub fn find(conn: &mut Conn, id: i64) -> Result<Self> {
        customers::table
            .find(id)
            .select(Customer::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| Error::CustomerNotFound(id.to_string()))
    }

    /// Look up a customer by an exact "first last" name query
    pub fn find_by_name(conn: &mut Conn, name: &str) -> Result<Self> {
        let query = search::sanitize_search_query(name)?;

        customers::table
            .filter(customers::first_name.eq(&query.first))
            .filter(customers::last_name.eq(&query.last))
            .select(Customer::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| Error::CustomerNotFound(name.to_string()))
    }

    /// Up to 10 customers ranked by reservation count, busiest first
    ///
    /// Resolves each ranked id back through [`Customer::find`]; a single
    /// failed resolution aborts the whole batch
    pub fn best(conn: &mut Conn) -> Result<Vec<Self>> {
        let ids = Reservation::top_customer_ids(conn)?;

        let best = ids
            .into_iter()
            .map(|id| Customer::find(conn, id))
            .collect::<Result<Vec<Self>>>()?;

        if best.is_empty() {
            return Err(Error::Connection(
                "Could not get the list of best customers".to_owned(),
            ));
        }

        Ok(best)
    }

    pub fn reservations(&self, conn: &mut Conn) -> Result<Vec<Reservation>> {
        Reservation::for_customer(conn, self.id)
    }
}

#[derive(Debug, Default)]
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl<'a> NewCustomer<'a> {
    pub fn new(first_name: &'a str, last_name: &'a str) -> Self {
        Self {
            first_name,
            last_name,
            ..Default::default()
        }
    }

    fn as_insertable(&self) -> InsertableCustomer<'a> {
        InsertableCustomer {
            first_name: self.first_name,
            last_name: self.last_name,
            phone: normalize_phone(self.phone),
            notes: self.notes.unwrap_or(""),
        }
    }
}

impl NewCustomer<'_> {
    pub fn save(self, conn: &mut Conn) -> Result<Customer> {
        diesel::insert_into(customers::table)
            .values(self.as_insertable())
            .returning(Customer::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or_else(|| Error::Connection("Unable to add new customer".to_owned()))
    }
}

#[derive(Insertable)]
#[diesel(table_name = customers)]
struct InsertableCustomer<'a> {
    first_name: &'a str,
    last_name: &'a str,
    phone: Option<&'a str>,
    notes: &'a str,
}

/// An absent, empty, or whitespace-only phone is stored as NULL; anything
/// else, including "0", is kept verbatim
fn normalize_phone(phone: Option<&str>) -> Option<&str> {
    phone.filter(|number| !number.trim().is_empty())
}

#[derive(Default, Clone, AsChangeset)]
#[diesel(table_name = customers)]
pub struct ChangeCustomer<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub phone: Option<Option<&'a str>>,
    pub notes: Option<&'a str>,
}

impl ChangeCustomer<'_> {
    pub fn save(self, conn: &mut Conn, customer: &Customer) -> Result<()> {
        diesel::update(customer).set(self.normalized()).execute(conn)?;
        Ok(())
    }

    pub fn apply(self, conn: &mut Conn, customer: &mut Customer) -> Result<()> {
        let changeset = self.normalized();
        changeset.clone().save(conn, customer)?;

        if let Some(value) = changeset.first_name {
            customer.first_name = value.to_string();
        }
        if let Some(value) = changeset.last_name {
            customer.last_name = value.to_string();
        }
        if let Some(value) = changeset.phone {
            customer.phone = value.map(str::to_string);
        }
        if let Some(value) = changeset.notes {
            customer.notes = value.to_string();
        }

        Ok(())
    }

    fn normalized(self) -> Self {
        Self {
            phone: self.phone.map(normalize_phone),
            ..self
        }
    }
}

#[derive(Default)]
pub struct QueryCustomer<'a> {
    pub name: Option<&'a str>,
    pub count: Option<i64>,
}

impl QueryCustomer<'_> {
    pub fn run(&self, conn: &mut Conn) -> Result<Vec<Customer>> {
        let mut query = customers::table
            .order((customers::last_name.asc(), customers::first_name.asc()))
            .into_boxed();

        if let Some(name) = self.name {
            query = query.filter(
                customers::first_name
                    .like(name)
                    .or(customers::last_name.like(name)),
            );
        }
        if let Some(count) = self.count {
            query = query.limit(count);
        }

        Ok(query.select(Customer::as_select()).load(conn)?)
    }
}
