pub mod backend_status;
pub mod footer;
pub mod handlers;
pub mod header;
pub mod preview_area;
pub mod results;
pub mod shell;
pub mod upload_section;
pub mod utils;
