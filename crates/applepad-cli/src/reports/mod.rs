mod tables;

pub use self::tables::{deltas as print_delta_report, derivation as print_derivation};
