pub mod config;
pub mod context;
pub mod db;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;

pub use context::{AppContext, SharedContext};
pub use services::player_controller::PlayerController;
pub use services::team_controller::TeamController;
