pub mod theme;
pub mod touch;
pub mod viewport;

pub use theme::Theme;
pub use touch::PinchState;
pub use viewport::Viewport;
