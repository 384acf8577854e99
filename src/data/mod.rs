pub mod entry;
pub mod source;
pub mod validate;
