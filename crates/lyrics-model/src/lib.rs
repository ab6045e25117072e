pub mod album;
pub mod song;
pub mod corpus;

pub use album::*;
pub use song::*;
pub use corpus::*;
