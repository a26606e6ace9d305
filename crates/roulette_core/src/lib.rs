//! Member selection and balanced random grouping.

pub mod display;
pub mod error;
pub mod input;
pub mod partition;
pub mod selection;
pub mod session;

pub use display::to_display_result;
pub use error::{RollBlock, RouletteError};
pub use input::parse_group_size;
pub use partition::{balanced_sizes, partition, roll, shuffle, PartitionError};
pub use selection::{derived_unselected, SelectionManager};
pub use session::Session;
