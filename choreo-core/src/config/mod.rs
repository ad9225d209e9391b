pub(crate) mod breakpoint;
pub(crate) mod model;
