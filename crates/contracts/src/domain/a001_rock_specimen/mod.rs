pub mod aggregate;

pub use aggregate::RockSpecimen;
