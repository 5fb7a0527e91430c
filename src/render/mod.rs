pub mod navigation;
pub mod page;

pub use navigation::sidebar;
pub use page::{authentication, endpoint_page, introduction, not_found};
