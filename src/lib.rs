mod as_value;
mod column;
mod connection;
mod record;
mod schema;
mod sql_writer;
mod table;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use column::*;
pub use connection::*;
pub use record::*;
pub use schema::*;
pub use sql_writer::*;
pub use table::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
