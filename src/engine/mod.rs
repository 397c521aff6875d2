//! Game state model and the turn engine

pub mod blocs;
pub mod crisis;
pub mod invariants;
pub mod narrative;
pub mod resources;
pub mod rival;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use narrative::{BriefingItem, BriefingKind, Tone};
pub use resources::ResourceState;
pub use state::{create_initial_state, GameState, PolicyChoice, TurnReport};
pub use systems::resolve_turn;
