pub mod api;
pub mod core;

pub use api::{build_client, TorusBuilder, TorusClient};
pub use core::{
    config::TorusConfig, context::RequestContext, errors::TorusError, kernel::FileAttachment,
    types::*,
};
