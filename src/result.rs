pub type Result<T> = std::result::Result<T, Error>;

#[derive(derive_more::Error, derive_more::Display, derive_more::From, Debug)]
pub enum Error {
    #[display("Not found")]
    NotFound,
    #[display("No such customer: {_0}")]
    CustomerNotFound(#[error(not(source))] String),
    #[display("No such reservation: {_0}")]
    ReservationNotFound(#[error(not(source))] String),
    #[display("Connection error. {_0}")]
    Connection(#[error(not(source))] String),
    #[display("Invalid input. {_0}")]
    InvalidInput(#[error(not(source))] String),
    #[display("Unable to connect to the database")]
    #[from]
    ConnectionFailed(diesel::result::ConnectionError),
    #[display("Diesel error. {_0}")]
    DieselError(diesel::result::Error),
    #[display("Generic error. {_0}")]
    #[from]
    GenericError(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// HTTP-style status code consumers default to when shaping a response
    pub fn status(&self) -> u16 {
        match self {
            Error::NotFound | Error::CustomerNotFound(_) | Error::ReservationNotFound(_) => 404,
            Error::InvalidInput(_) => 400,
            Error::Connection(_) => 522,
            Error::ConnectionFailed(_) | Error::DieselError(_) | Error::GenericError(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound | Error::CustomerNotFound(_) | Error::ReservationNotFound(_)
        )
    }
}

impl From<diesel::result::Error> for Error {
    fn from(e: diesel::result::Error) -> Error {
        match e {
            diesel::result::Error::NotFound => Error::NotFound,
            _ => Error::DieselError(e),
        }
    }
}

pub trait OptionalExtension<T> {
    fn optional(self) -> Result<Option<T>>;
    fn optional_empty_changeset(self) -> Result<Option<T>>;
}

impl<T> OptionalExtension<T> for Result<T> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn optional_empty_changeset(self) -> Result<Option<T>> {
        use diesel::result::{EmptyChangeset, Error::QueryBuilderError};

        match self {
            Ok(value) => Ok(Some(value)),
            Err(Error::DieselError(QueryBuilderError(e))) if e.is::<EmptyChangeset>() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
