pub mod avatar;
pub mod identity;
pub mod notification;
pub mod profile_links;
pub mod project;
pub mod task;
