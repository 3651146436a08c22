//! Connected Apps Entity Module

pub mod connected_app;
