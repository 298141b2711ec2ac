pub mod loading;
pub mod notify;
pub mod overlay;

pub use overlay::{use_overlay, OverlayProvider};
