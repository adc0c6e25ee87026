//! remixer-panel
//!
//! The panel controller: one explicit state container, a single dispatcher
//! for tagged user actions, and an async runtime that performs the network
//! effects those actions request.
//!
//! Transitions are pure. [`state::PanelState::begin`] turns an action into
//! effects, [`state::PanelState::apply`] folds an effect's result back in.
//! [`controller::PanelController`] is the only caller of both the remix
//! engine and the saved-items store.

pub mod action;
pub mod controller;
pub mod effect;
pub mod message;
pub mod state;
