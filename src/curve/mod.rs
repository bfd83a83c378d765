pub(crate) mod drawer;
pub(crate) mod model;
