// Re-export wire types so they are reachable as applepad_core::*
pub use applepad_protocol::params;
pub use applepad_protocol::protocol;
pub use applepad_protocol::trial;

// Internal Modules
pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod outcome;
pub mod palette;
pub mod prompt;
pub mod refine;
pub mod scorer;
pub mod session;
pub mod stroke;
pub mod style;
pub mod util;
