pub mod address;
pub mod date;
