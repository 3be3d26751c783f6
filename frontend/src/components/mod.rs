pub mod confirm_modal;
pub mod employee_form;
pub mod employee_list;
pub mod language_selector;
pub mod navigation_menu;
pub mod pagination;
