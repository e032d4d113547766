use std::sync::{Arc, Mutex, MutexGuard};

use pb_core::clipboard::{ClipboardSelection, MimeBag, NativeImage};
use pb_core::ports::{ClipboardError, SystemClipboardPort};

use super::png::{encode_png, IMAGE_PNG};

#[derive(Default)]
struct State {
    clipboard: Arc<MimeBag>,
    primary: Arc<MimeBag>,
    image: Option<NativeImage>,
    clipboard_commits: usize,
    primary_commits: usize,
}

impl State {
    fn bag_mut(&mut self, selection: ClipboardSelection) -> &mut Arc<MimeBag> {
        match selection {
            ClipboardSelection::Clipboard => &mut self.clipboard,
            ClipboardSelection::Primary => &mut self.primary,
        }
    }

    fn record_commit(&mut self, selection: ClipboardSelection) {
        match selection {
            ClipboardSelection::Clipboard => self.clipboard_commits += 1,
            ClipboardSelection::Primary => self.primary_commits += 1,
        }
    }
}

/// Process-local clipboard with both selections.
///
/// Used by headless runs and tests. Every `set_*` call counts as one commit
/// on its selection; [`seed`](Self::seed) does not.
#[derive(Default)]
pub struct InMemoryClipboard {
    state: Mutex<State>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, ClipboardError> {
        self.state
            .lock()
            .map_err(|_| ClipboardError::Backend("in-memory clipboard lock poisoned".into()))
    }

    /// Place `bag` on `selection` as if another application had copied it.
    pub fn seed(&self, selection: ClipboardSelection, bag: MimeBag) -> Result<(), ClipboardError> {
        *self.state()?.bag_mut(selection) = Arc::new(bag);
        Ok(())
    }

    /// Number of `set_mime_bag`/`set_image` calls that reached `selection`.
    pub fn commit_count(&self, selection: ClipboardSelection) -> usize {
        match self.state() {
            Ok(state) => match selection {
                ClipboardSelection::Clipboard => state.clipboard_commits,
                ClipboardSelection::Primary => state.primary_commits,
            },
            Err(_) => 0,
        }
    }

    /// The last image put on either selection.
    pub fn image(&self) -> Option<NativeImage> {
        self.state().ok().and_then(|state| state.image.clone())
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn mime_bag(&self, selection: ClipboardSelection) -> Result<Arc<MimeBag>, ClipboardError> {
        let mut state = self.state()?;
        Ok(Arc::clone(state.bag_mut(selection)))
    }

    fn set_mime_bag(
        &self,
        selection: ClipboardSelection,
        bag: Option<MimeBag>,
    ) -> Result<(), ClipboardError> {
        let mut state = self.state()?;
        *state.bag_mut(selection) = Arc::new(bag.unwrap_or_default());
        state.record_commit(selection);
        Ok(())
    }

    fn set_image(
        &self,
        selection: ClipboardSelection,
        image: &NativeImage,
    ) -> Result<(), ClipboardError> {
        let png = encode_png(image)?;
        let mut bag = MimeBag::new();
        bag.set_data(IMAGE_PNG, png);

        let mut state = self.state()?;
        *state.bag_mut(selection) = Arc::new(bag);
        state.image = Some(image.clone());
        state.record_commit(selection);
        Ok(())
    }
}
