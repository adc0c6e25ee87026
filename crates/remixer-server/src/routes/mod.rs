pub mod health;
pub mod panel;
pub mod share;
