pub mod linalg;
pub mod lu;
pub mod qr;
