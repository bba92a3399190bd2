//! Ports (interfaces) between the application layer and the outside world

pub mod id_generator;
pub mod response_delay;
pub mod session_observer;
pub mod transcript_logger;
