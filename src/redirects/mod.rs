pub mod handler;
pub mod record;
pub mod table;

pub use self::{
    handler::RedirectHandler,
    record::{DecodeError, RedirectFormat, RedirectRecord},
    table::RedirectTable,
};
