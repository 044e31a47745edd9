pub mod error;
pub mod routes;
pub mod settings;
pub mod state;
pub mod upstream;

pub use routes::router;
pub use settings::Settings;
pub use state::AppState;
