pub mod library;
pub mod range;

pub use self::library::{LibraryState, StyleLibrary};
pub use self::range::RangeLabel;
