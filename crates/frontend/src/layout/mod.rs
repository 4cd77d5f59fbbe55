pub mod anchor_scroll;
pub mod footer;
pub mod navbar;
pub mod tabs;
