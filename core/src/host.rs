//! The seam between the navigator and the view that renders the sections.

use kickoff_types::{
    ListenerId, ListenerKind, ListenerTarget, Overflow, ScrollIntoView, ScrollScope, SectionId,
};

/// Operations a host view exposes to the navigator.
pub trait ScrollHost {
    /// Current vertical overflow of `scope`.
    fn overflow(&self, scope: &ScrollScope) -> Overflow;

    fn set_overflow(&mut self, scope: &ScrollScope, value: Overflow);

    /// Registers interest in `kind` events on `target`.
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId;

    /// Unregisters a listener. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);

    /// Brings the section with `id` into view.
    ///
    /// Returns `false` when no such section is currently rendered.
    fn scroll_into_view(&mut self, id: &SectionId, options: ScrollIntoView) -> bool;
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn overflow(&self, scope: &ScrollScope) -> Overflow {
        (**self).overflow(scope)
    }

    fn set_overflow(&mut self, scope: &ScrollScope, value: Overflow) {
        (**self).set_overflow(scope, value);
    }

    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        (**self).add_listener(target, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id);
    }

    fn scroll_into_view(&mut self, id: &SectionId, options: ScrollIntoView) -> bool {
        (**self).scroll_into_view(id, options)
    }
}

/// An overflow override on one scope, remembering the value it replaced.
///
/// The previous value is read at acquisition time, so every activation
/// restores whatever was there at that moment.
#[derive(Debug)]
#[must_use = "an unreleased guard leaves the scope's overflow overridden"]
pub struct OverflowGuard {
    scope: ScrollScope,
    previous: Overflow,
}

impl OverflowGuard {
    pub fn acquire<H: ScrollHost + ?Sized>(
        host: &mut H,
        scope: ScrollScope,
        value: Overflow,
    ) -> Self {
        let previous = host.overflow(&scope);
        host.set_overflow(&scope, value);
        tracing::debug!(%scope, %previous, %value, "Overflow overridden");
        Self { scope, previous }
    }

    /// Writes the saved value back.
    pub fn release<H: ScrollHost + ?Sized>(self, host: &mut H) {
        host.set_overflow(&self.scope, self.previous);
        tracing::debug!(scope = %self.scope, restored = %self.previous, "Overflow restored");
    }
}

/// A listener attached to the host, detached by [`ListenerRegistration::release`].
#[derive(Debug)]
#[must_use = "an unreleased registration leaks a host listener"]
pub struct ListenerRegistration {
    id: ListenerId,
}

impl ListenerRegistration {
    pub fn attach<H: ScrollHost + ?Sized>(
        host: &mut H,
        target: ListenerTarget,
        kind: ListenerKind,
    ) -> Self {
        Self {
            id: host.add_listener(target, kind),
        }
    }

    pub fn release<H: ScrollHost + ?Sized>(self, host: &mut H) {
        host.remove_listener(self.id);
    }
}
