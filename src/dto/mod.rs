pub mod equipo_dto;
pub mod jugador_dto;
pub mod record;
