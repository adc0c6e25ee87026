//! remixer-core
//!
//! Pure domain types shared by every remixer crate: generated candidates,
//! saved items, the marker-line parser, length rules, credentials and share
//! links. Nothing here talks to the network.

pub mod credential;
pub mod error;
pub mod models;
pub mod share;
