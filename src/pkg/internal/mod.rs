pub mod analysis;
pub mod read;
pub mod vocab;
