pub mod member;
pub mod roster;
pub mod selection;

pub use member::*;
pub use roster::*;
pub use selection::*;
