pub mod app_dirs;
pub mod clipboard;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::LocalClipboard;
