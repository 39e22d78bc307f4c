pub mod city;
pub mod period;
pub mod trip;

pub use city::City;
pub use period::{Filters, Period};
pub use trip::{Schema, Trip, TripTable};
