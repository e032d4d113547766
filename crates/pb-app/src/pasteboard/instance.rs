//! Pasteboard instance state and lifecycle.
//!
//! An instance lives for one editing or drag-and-drop operation. It reads from
//! at most one source at a time:
//!
//! - the **host** selection its role targets, queried live on every read,
//! - a **read snapshot**, shared with a drag carrier and never mutated or
//!   freed here, or
//! - a **writable** bag staged by web-facing `setData` calls, owned by the
//!   instance until the role hands it to the host.
//!
//! All sources live in one enum, so a snapshot and a writable bag are never
//! present together.

use std::ops::Deref;
use std::sync::Arc;

use pb_core::clipboard::{ClipboardSelection, MimeBag, NativeImage};
use pb_core::pasteboard::{PasteboardRole, WritableDisposition};
use pb_core::ports::SystemClipboardPort;
use tracing::{debug, trace, warn};

use super::HtmlWrapping;

#[derive(Debug, Default)]
pub(super) enum BagSlot {
    #[default]
    Empty,
    Host,
    Snapshot(Arc<MimeBag>),
    Writable(MimeBag),
}

/// The bag reads are answered from, either shared or staged locally.
#[derive(Debug)]
pub enum EffectiveBag<'a> {
    Shared(Arc<MimeBag>),
    Staged(&'a MimeBag),
}

impl Deref for EffectiveBag<'_> {
    type Target = MimeBag;

    fn deref(&self) -> &MimeBag {
        match self {
            EffectiveBag::Shared(bag) => bag,
            EffectiveBag::Staged(bag) => bag,
        }
    }
}

pub struct PasteboardInstance {
    role: PasteboardRole,
    pub(super) slot: BagSlot,
    pub(super) clipboard: Arc<dyn SystemClipboardPort>,
    pub(super) html_wrapping: HtmlWrapping,
}

impl PasteboardInstance {
    /// Build an instance in `role`, optionally reading from `readable`.
    ///
    /// Without `readable`, roles that hand their bag to the host read the
    /// host selection live; the others start empty.
    pub fn create(
        clipboard: Arc<dyn SystemClipboardPort>,
        role: PasteboardRole,
        readable: Option<Arc<MimeBag>>,
        html_wrapping: HtmlWrapping,
    ) -> Self {
        debug!(
            role = ?role,
            has_snapshot = readable.is_some(),
            "pasteboard created"
        );
        Self {
            role,
            slot: readable.map_or_else(|| resting_slot(role), BagSlot::Snapshot),
            clipboard,
            html_wrapping,
        }
    }

    pub fn role(&self) -> PasteboardRole {
        self.role
    }

    /// `true` iff this instance targets the host's primary selection.
    pub fn selection_mode(&self) -> bool {
        self.selection() == ClipboardSelection::Primary
    }

    pub(super) fn selection(&self) -> ClipboardSelection {
        self.role.target_selection()
    }

    /// The shared bag this instance reads from, if it is not staging one.
    ///
    /// Host-backed instances return the current host contents.
    pub fn read_snapshot(&self) -> Option<Arc<MimeBag>> {
        match &self.slot {
            BagSlot::Host => Some(self.host_bag()),
            BagSlot::Snapshot(bag) => Some(Arc::clone(bag)),
            _ => None,
        }
    }

    pub fn writable(&self) -> Option<&MimeBag> {
        match &self.slot {
            BagSlot::Writable(bag) => Some(bag),
            _ => None,
        }
    }

    /// The bag reads are answered from: the host, a snapshot or the writable bag.
    pub fn clipboard_data(&self) -> Option<EffectiveBag<'_>> {
        match &self.slot {
            BagSlot::Host => Some(EffectiveBag::Shared(self.host_bag())),
            BagSlot::Snapshot(bag) => Some(EffectiveBag::Shared(Arc::clone(bag))),
            BagSlot::Writable(bag) => Some(EffectiveBag::Staged(bag)),
            BagSlot::Empty => None,
        }
    }

    /// Drag-image rendering is not performed by this adapter.
    pub fn set_drag_image(&mut self, image: Option<&NativeImage>, hot_spot: (i32, i32)) {
        trace!(
            has_image = image.is_some(),
            hot_spot = ?hot_spot,
            "set_drag_image ignored"
        );
    }

    /// Remove `mime` from the staged bag.
    ///
    /// A bag emptied this way is discarded. Roles that hand their bag to the
    /// host then commit whatever is left, `None` included, to their selection.
    pub fn clear_format(&mut self, mime: &str) {
        if let BagSlot::Writable(bag) = &mut self.slot {
            bag.remove_format(mime);
            if bag.is_empty() {
                debug!(role = ?self.role, "writable bag emptied");
                self.slot = resting_slot(self.role);
            }
        }

        if self.role.writable_disposition() == WritableDisposition::HandOffToHost {
            let staged = self.take_writable();
            self.commit(self.selection(), staged);
        }
    }

    /// Drop the staged bag; host-owned roles also clear their selection.
    pub fn clear(&mut self) {
        if self.role.writable_disposition() == WritableDisposition::HandOffToHost {
            self.commit(self.selection(), None);
        }
        if self.take_writable().is_some() {
            debug!(role = ?self.role, "writable bag dropped");
        }
    }

    /// Move the writable bag out, leaving any other source untouched.
    pub(super) fn take_writable(&mut self) -> Option<MimeBag> {
        match std::mem::replace(&mut self.slot, resting_slot(self.role)) {
            BagSlot::Writable(bag) => Some(bag),
            other => {
                self.slot = other;
                None
            }
        }
    }

    /// Hand `bag` to the host. The host owns it from here on.
    pub(super) fn commit(&self, selection: ClipboardSelection, bag: Option<MimeBag>) {
        let formats = bag.as_ref().map_or(0, MimeBag::len);
        match self.clipboard.set_mime_bag(selection, bag) {
            Ok(()) => debug!(
                role = ?self.role,
                selection = %selection,
                formats,
                "committed bag to host clipboard"
            ),
            Err(err) => warn!(
                role = ?self.role,
                selection = %selection,
                error = %err,
                "failed to commit bag to host clipboard"
            ),
        }
    }

    /// Current host bag for this instance's selection; empty on failure.
    pub(super) fn host_bag(&self) -> Arc<MimeBag> {
        let selection = self.selection();
        self.clipboard.mime_bag(selection).unwrap_or_else(|err| {
            warn!(selection = %selection, error = %err, "failed to read host clipboard");
            Arc::default()
        })
    }
}

/// Where an instance reads from when it holds no staged or borrowed bag.
pub(super) fn resting_slot(role: PasteboardRole) -> BagSlot {
    match role.writable_disposition() {
        WritableDisposition::HandOffToHost => BagSlot::Host,
        WritableDisposition::DropLocally => BagSlot::Empty,
    }
}

impl Drop for PasteboardInstance {
    fn drop(&mut self) {
        if let BagSlot::Writable(bag) = &self.slot {
            match self.role.writable_disposition() {
                WritableDisposition::DropLocally => {
                    trace!(role = ?self.role, formats = bag.len(), "freeing writable bag")
                }
                WritableDisposition::HandOffToHost => debug!(
                    role = ?self.role,
                    formats = bag.len(),
                    "discarding writable bag that was never committed"
                ),
            }
        }
    }
}

impl std::fmt::Debug for PasteboardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteboardInstance")
            .field("role", &self.role)
            .field("slot", &self.slot)
            .field("html_wrapping", &self.html_wrapping)
            .finish()
    }
}
