mod as_value;
mod column;
mod config;
mod entity;
mod error;
mod executor;
mod query;
mod repository;
mod sql_writer;
mod table_ref;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use column::*;
pub use config::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use query::*;
pub use repository::*;
pub use sql_writer::*;
pub use table_ref::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
