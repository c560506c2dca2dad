//! The studio session and the controller that drives it.

pub(crate) mod controller;
pub(crate) mod state;
