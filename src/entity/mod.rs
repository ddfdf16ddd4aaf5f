//! SeaORM entity definitions.
//!
//! These entities are used for database access only and stay separate from
//! the business models in `models`: the storage layer queries them, then
//! converts to the business types.

pub mod prelude;

pub mod competences;
pub mod evaluation_attributions;
pub mod evaluation_items;
pub mod evaluations;
pub mod items;
pub mod utilisateurs;
pub mod validations;
