use error::LoftError;

pub mod bootstrap;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod fs;
pub mod index;
pub mod repository;
pub mod settings;

pub type LoftResult<T> = std::result::Result<T, LoftError>;
