//! Modal dialogs

pub mod expense;
pub mod help;
