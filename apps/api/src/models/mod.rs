pub mod exchange;
pub mod profile;
