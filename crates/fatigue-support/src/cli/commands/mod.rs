pub mod context;
pub mod exercise;
pub mod personnel;
pub mod roster;
pub mod sleep;

pub use context::show as show_context;
pub use exercise::show as show_exercise;
pub use personnel::list as list_personnel;
pub use roster::{generate as generate_roster, show as show_roster};
pub use sleep::show as show_sleep;
