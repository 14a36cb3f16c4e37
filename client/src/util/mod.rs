pub mod persistence;
pub mod sleep;
pub mod validate;
