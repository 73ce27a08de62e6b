pub(crate) mod catalog;
pub(crate) mod permissions;
pub(crate) mod system;
