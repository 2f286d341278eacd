pub(crate) mod element;
pub(crate) mod registry;
pub(crate) mod sink;
