use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::render::SvgDocument;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identity of one chart instance's rendered output. A chart may only
/// detach what it attached itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub(crate) fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// The rendering target charts draw into and exports read from.
///
/// Holds at most one rendered vector root at a time, exclusively owned by
/// the chart instance that produced it. Exports take shared borrows and
/// clone the document, so concurrent reads never observe a mutation.
#[derive(Debug, Default)]
pub struct Container {
    rendered: Option<(ChartHandle, SvgDocument)>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current vector-graphic root, if any chart has rendered.
    #[must_use]
    pub fn vector_root(&self) -> Option<&SvgDocument> {
        self.rendered.as_ref().map(|(_, doc)| doc)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered.is_none()
    }

    /// Drops whatever is rendered, regardless of owner.
    pub fn clear(&mut self) {
        self.rendered = None;
    }

    pub(crate) fn attach(&mut self, handle: ChartHandle, doc: SvgDocument) {
        trace!(handle = handle.0, "attach rendered document");
        self.rendered = Some((handle, doc));
    }

    /// Detaches the rendered document if `handle` owns it. Returns whether
    /// anything was removed.
    pub(crate) fn detach(&mut self, handle: ChartHandle) -> bool {
        match &self.rendered {
            Some((owner, _)) if *owner == handle => {
                self.rendered = None;
                true
            }
            _ => false,
        }
    }
}
