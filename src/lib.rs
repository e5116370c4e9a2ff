pub mod api;
pub mod core;
pub mod export;
pub mod format;
pub mod i18n;
