pub mod consolidate;
pub mod icons;
