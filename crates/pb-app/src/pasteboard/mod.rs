mod factory;
mod html;
mod instance;
mod read;
mod write;

pub use factory::PasteboardFactory;
pub use html::HtmlWrapping;
pub use instance::{EffectiveBag, PasteboardInstance};
pub use read::PastedFragment;
