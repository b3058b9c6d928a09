pub mod centering;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod gesture;
pub mod hover;
pub mod lifecycle;
pub mod probe;
pub mod progress;
pub mod proximity;
pub mod reveal;
pub mod stack;
pub mod tokenize;

pub use centering::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use gesture::*;
pub use hover::*;
pub use lifecycle::*;
pub use probe::*;
pub use progress::*;
pub use proximity::*;
pub use reveal::*;
pub use stack::*;
pub use tokenize::*;
