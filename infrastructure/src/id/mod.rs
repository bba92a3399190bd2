//! Message id generation adapters

mod uuid_generator;

pub use uuid_generator::UuidIdGenerator;
