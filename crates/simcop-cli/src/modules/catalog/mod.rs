mod actions;
pub(crate) mod args;
mod format;

pub(crate) use actions::{
    handle_describe_table, handle_list_tables, handle_provision, handle_show_catalog,
};
