//! Infrastructure layer: concrete repository and pusher implementations plus
//! wire DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
