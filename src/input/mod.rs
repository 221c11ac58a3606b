//! Input handling: bindable key actions and the processor that converts
//! raw key/pointer events into camera mutations.

/// Bindable camera actions.
pub mod keyboard;
/// Converts raw events into camera calls.
pub mod processor;

pub use keyboard::KeyAction;
pub use processor::InputProcessor;
