pub mod form;
pub mod guard;
pub mod layout;
pub mod pagination;
pub mod registry;
pub mod table;
