pub mod fetch;
pub mod laws;
