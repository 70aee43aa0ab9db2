pub use description::*;
pub use feature_item::*;
pub use icon::*;

mod description;
mod feature_item;
mod icon;
