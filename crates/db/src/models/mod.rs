//! Row structs and wire DTOs.
//!
//! Each submodule contains a `FromRow` struct matching its table. The
//! `pokemon` module also owns the wire request/response shapes and the
//! mapping between them and the `pokemon` + `pokemon_species` row pair.

pub mod lookup;
pub mod pokemon;
pub mod pokemon_type;
pub mod species;
