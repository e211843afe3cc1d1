pub mod a001_rock_specimen;
pub mod a002_mineral_specimen;
