pub mod item;
pub mod marketplace;
pub mod params;
pub mod record;

pub use item::*;
pub use marketplace::*;
pub use params::*;
pub use record::*;
