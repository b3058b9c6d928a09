//! DOM adapters for the layout interpolators. Each effect measures its own
//! elements, asks `rail_core` for transform descriptors and writes styles.

pub mod rail;
pub mod reveal;
pub mod scale;
pub mod stack;

pub use rail::RailEffect;
pub use reveal::RevealEffect;
pub use scale::ScaleEffect;
pub use stack::StackEffect;
