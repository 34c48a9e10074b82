mod download;
mod timekeeping_api;

pub use download::{Download, XLSX_CONTENT_TYPE};
pub use timekeeping_api::TimekeepingApi;
