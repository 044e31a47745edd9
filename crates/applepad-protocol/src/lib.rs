// Wire-level types shared by the pipeline, the client and the backend.
pub mod params;
pub mod protocol;
pub mod trial;

pub use self::params::{NormalizedParams, ParamGroup, ParamKey, RawSliderParams};
