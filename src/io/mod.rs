pub mod links;
pub mod matrix;
