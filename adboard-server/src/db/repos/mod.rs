//! Repository implementations for database access
//!
//! Every operation is a single statement executed on the request's
//! connection; writes commit on statement completion.

pub mod adverts;

pub use adverts::{Advert, AdvertRepo, DbError};
