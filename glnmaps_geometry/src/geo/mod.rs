mod collection;
mod feature;

pub use collection::*;
pub use feature::*;
