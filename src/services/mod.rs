pub mod player_controller;
pub mod resources;
pub mod team_controller;
pub mod view_state;
