pub mod contract;
pub mod employee;
