pub(crate) mod blob;
pub(crate) mod palette;
