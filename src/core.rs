pub mod analysis;
pub mod capacitor;
pub mod invoice;
pub mod power_factor;
pub mod summary;
