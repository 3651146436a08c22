pub mod connected_app_repo;

pub use connected_app_repo::{ConnectedAppRepository, ConnectedAppStore, NewConnectedApp};
