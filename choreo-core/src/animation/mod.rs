pub(crate) mod ease;
pub(crate) mod reveal;
pub(crate) mod segment;
pub(crate) mod toggle;
pub(crate) mod transition;
