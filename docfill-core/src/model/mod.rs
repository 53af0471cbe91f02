pub mod context;
pub mod field;
pub mod styled;
