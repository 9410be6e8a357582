pub mod config;
pub mod describe;
pub mod global;
pub mod inspect;
pub mod keys;
pub mod validate;
