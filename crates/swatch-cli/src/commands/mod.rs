pub mod build;
pub mod dispatch;
pub mod list;
pub mod nav;
