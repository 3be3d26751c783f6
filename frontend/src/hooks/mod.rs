pub mod use_employees;
pub mod use_employee_form;
pub mod use_language;
