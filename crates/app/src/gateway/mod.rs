//! Persistence Gateway

mod table;
mod unit_of_work;

pub use table::Table;
pub use unit_of_work::UnitOfWork;
