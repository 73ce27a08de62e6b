mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_grant, handle_revoke, handle_show_user};
