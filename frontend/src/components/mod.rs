pub mod handlers;
pub mod header;
pub mod menu;
pub mod progress;
pub mod results;
pub mod text_input;
pub mod upload_section;
pub mod url_input;
pub mod utils;
