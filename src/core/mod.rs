pub mod backup;
pub mod employee;
pub mod log;
pub mod ticket;
