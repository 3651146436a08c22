//! Account Token Entity Module

pub mod account_token;
