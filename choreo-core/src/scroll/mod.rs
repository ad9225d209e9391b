pub(crate) mod gate;
pub(crate) mod pin;
pub(crate) mod progress;
pub(crate) mod smoothing;
