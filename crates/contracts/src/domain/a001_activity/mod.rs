pub mod aggregate;
pub mod availability;

pub use aggregate::*;
pub use availability::*;
