pub mod json;
pub mod rust_gen;
pub mod summary;
