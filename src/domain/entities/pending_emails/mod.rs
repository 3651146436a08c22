//! Pending Email Entity Module

pub mod pending_email;
