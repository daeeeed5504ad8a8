pub mod browser;
pub mod clipboard;
pub mod intents;
pub mod link;

pub use browser::open_share_dialog;
pub use clipboard::copy_to_clipboard;
pub use intents::{facebook_url, share_text, whatsapp_url, ShareTarget};
pub use link::{LinkError, ShareLink, DEFAULT_BASE_URL};
