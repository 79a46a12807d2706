pub mod record;
#[cfg(feature = "esp-hal-runtime")]
pub mod speed_store;

#[cfg(feature = "esp-hal-runtime")]
pub use speed_store::SpeedStore;
