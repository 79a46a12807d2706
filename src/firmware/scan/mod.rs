#[cfg(feature = "esp-hal-runtime")]
pub mod driver;
pub mod merge;
