pub mod form_settings;
pub mod navigation;
pub mod tabs;
