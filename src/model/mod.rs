pub mod contract;
pub mod department;
pub mod employee;
pub mod role;
pub mod user;
