pub mod models;
pub mod service;
pub mod store;

pub use models::{Document, FilterCriteria};
pub use service::{AppState, create_app};
pub use store::DocumentStore;
