//! Domain layer - Business entities

pub mod tag;

pub use tag::Tag;
