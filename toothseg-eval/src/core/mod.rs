pub mod fdi;
pub mod palette;
pub mod shared;
