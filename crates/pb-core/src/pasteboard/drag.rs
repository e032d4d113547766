use std::sync::Arc;

use crate::clipboard::MimeBag;

/// Data carried by an in-progress drag.
///
/// The carrier owns the bag; pasteboards created from it only borrow it.
#[derive(Debug, Clone, Default)]
pub struct DragData {
    bag: Arc<MimeBag>,
}

impl DragData {
    pub fn new(bag: MimeBag) -> Self {
        Self { bag: Arc::new(bag) }
    }

    pub fn platform_data(&self) -> Arc<MimeBag> {
        Arc::clone(&self.bag)
    }
}

impl From<MimeBag> for DragData {
    fn from(bag: MimeBag) -> Self {
        Self::new(bag)
    }
}
