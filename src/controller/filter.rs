use crate::model::employee::Employee;

/// Case-insensitive substring match against full name, email, department
/// and bank account. A blank query matches everything.
pub fn matches_query(employee: &Employee, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        &employee.full_name,
        &employee.email,
        &employee.department,
        &employee.bank_account,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the input order.
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| matches_query(e, query))
        .collect()
}
