/// One browsable image entry, snapshotted from the page at init.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: String,
    pub caption: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Prev,
    Next,
}

/// Keyboard mapping for an open lightbox. Anything else is ignored.
#[inline]
pub fn action_for_key(key: &str) -> Option<LightboxAction> {
    match key {
        "Escape" => Some(LightboxAction::Close),
        "ArrowLeft" => Some(LightboxAction::Prev),
        "ArrowRight" => Some(LightboxAction::Next),
        _ => None,
    }
}

/// Modal browsing state over a fixed, ordered gallery of `count` items.
///
/// Closed is `current == None`; open is `Some(i)` with `i < count`.
/// Next/previous wrap modulo the gallery length, so a single-item gallery
/// wraps to itself and the index never goes negative.
#[derive(Clone, Copy, Debug)]
pub struct LightboxState {
    count: usize,
    current: Option<usize>,
}

impl LightboxState {
    pub fn new(count: usize) -> Self {
        LightboxState {
            count,
            current: None,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Open at item `index`. Out-of-range indices are rejected rather than
    /// clamped; the caller only ever passes indices it wired itself.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.count {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Advance with wraparound. No-op while closed.
    pub fn next(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + 1) % self.count);
        }
    }

    /// Step back with wraparound; computed additively so the index never
    /// underflows at 0.
    pub fn prev(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + self.count - 1) % self.count);
        }
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Close => self.close(),
            LightboxAction::Prev => self.prev(),
            LightboxAction::Next => self.next(),
        }
    }
}
