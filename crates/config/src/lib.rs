//! Configuration loading for autojoin data.
//!
//! Autojoin families and the editor's autojoin switch are described in TOML.
//! Archetype names are resolved against an [`ArchetypeSet`] that the
//! archetype loader has already filled; this crate never invents archetypes.
//!
//! ```toml
//! [settings]
//! autojoin = true
//!
//! [[autojoin]]
//! name = "wall"
//! slots = [
//!     "wall_0",                              # main only
//!     ["wall_1", "wall_1_cracked"],          # main, then alternates
//!     [],                                    # empty slot
//!     { alternates = ["wall_3_mossy"] },     # alternates only
//!     # ... sixteen entries in total
//! ]
//! ```
//!
//! Slot `i` holds the tiles whose connected edges form the mask `i`
//! (North = 1, East = 2, South = 4, West = 8).
//!
//! [`ArchetypeSet`]: gridjoin_primitives::ArchetypeSet

pub mod error;
pub mod load;
pub mod schema;

pub use error::{ConfigError, Result};
pub use load::{load_file, parse_str};
pub use schema::{AutojoinConfig, FamilyConfig, Settings, SlotConfig, SlotTable};
