pub mod adapters;
pub mod driver;
pub mod entities;
