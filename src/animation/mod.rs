/// Easing curves.
pub mod ease;
/// Phased progress within an effect window.
pub mod progress;
