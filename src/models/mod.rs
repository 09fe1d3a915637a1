pub mod employee;
pub mod filter;
pub mod form;
pub mod status;
pub mod ticket;
