pub mod form;
pub mod naming;
pub mod quick_entry_settings;
pub mod sizes;
