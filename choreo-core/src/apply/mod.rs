pub(crate) mod applier;
#[cfg(feature = "web")]
pub(crate) mod dom;
pub(crate) mod target;
