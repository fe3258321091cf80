pub mod auth_service;
pub mod company_service;
pub mod csrf;
pub mod error;
pub mod linkedin_client;
pub mod search_service;

pub use auth_service::*;
pub use company_service::*;
pub use csrf::*;
pub use error::*;
pub use linkedin_client::*;
pub use search_service::*;
