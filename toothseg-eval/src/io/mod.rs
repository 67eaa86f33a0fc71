pub mod discover;
pub mod metadata;
pub mod ply;
