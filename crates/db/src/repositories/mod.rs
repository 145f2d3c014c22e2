//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` (or an open transaction for steps of a larger write) as the first
//! argument.

pub mod lookup_repo;
pub mod pokemon_repo;
pub mod pokemon_type_repo;
pub mod species_repo;

pub use lookup_repo::LookupRepo;
pub use pokemon_repo::PokemonRepo;
pub use pokemon_type_repo::PokemonTypeRepo;
pub use species_repo::SpeciesRepo;
