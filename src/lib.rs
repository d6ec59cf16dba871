//! itemtags - DTOs and domain entities for an Items with Tags application
//!
//! Validates API payloads for items and tags, maps persisted objects into
//! response shapes, and keeps absent update fields apart from explicit nulls.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::dtos::{
    ItemCreateDTO, ItemDTO, ItemUpdateDTO, Patch, TagCreateDTO, TagDTO, TagInItemDTO,
    TagUpdateDTO, Validated, ValidationErrors,
};
pub use domain::Tag;
pub use error::ItemTagsError;
