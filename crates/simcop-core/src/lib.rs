#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod constants;
pub mod error;
pub mod grants;
pub mod models;
pub mod permissions;
pub mod provisioning;
pub mod services;

#[cfg(test)]
mod testing;

pub use crate::catalog::*;
pub use crate::constants::*;
pub use crate::error::*;
pub use crate::grants::*;
pub use crate::models::*;
pub use crate::permissions::*;
pub use crate::provisioning::*;
pub use crate::services::*;
