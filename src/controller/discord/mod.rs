pub mod describe;
pub mod interaction;
