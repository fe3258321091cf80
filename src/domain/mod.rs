pub mod company_summary;
pub mod embedded_json;
pub mod json_path;
pub mod ld_json;
pub mod scrape_error;
pub mod scrape_type;
pub mod search_result;

pub use company_summary::*;
pub use embedded_json::*;
pub use ld_json::*;
pub use scrape_error::*;
pub use scrape_type::*;
pub use search_result::*;
