//! Dashboard page state, independent of any rendering.

pub mod dashboard;
pub mod department;
pub mod employee_detail;
pub mod employee_form;
pub mod employee_list;
pub mod filter;

#[cfg(test)]
pub(crate) mod fake;
