pub mod layered;
pub mod sweep;
pub mod util;

pub use layered::layered;
pub use sweep::sweep;
pub use util::{report, single_rates};
