pub mod layout;
pub mod notification;
