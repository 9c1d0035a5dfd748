//! The deck pane as a scroll host.
//!
//! Every section is rendered exactly one pane height tall, so the top line of
//! section `i` is `i * height`. The pane has two scroll scopes: the document
//! root and the named deck container. Both carry an overflow value; native
//! scrolling only moves the pane while neither of them is hidden.

use std::collections::HashMap;
use std::time::Duration;

use kickoff_core::ScrollHost;
use kickoff_types::ui::{AnimPhase, ScrollAnimation};
use kickoff_types::{
    ListenerId, ListenerKind, ListenerTarget, Overflow, ScrollBehavior, ScrollBlock,
    ScrollIntoView, ScrollScope, SectionId, SectionList,
};

/// Name of the deck pane's scroll container.
pub const DECK_CONTAINER: &str = "deck";

/// Terminal mode changes the frame loop must apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalRequest {
    EnableMouseCapture,
    DisableMouseCapture,
}

#[derive(Debug)]
pub struct DeckViewport {
    sections: SectionList,
    height: u16,
    offset: u32,
    animation: Option<ScrollAnimation>,
    scroll_duration: Duration,
    overflow: HashMap<ScrollScope, Overflow>,
    listeners: HashMap<ListenerId, (ListenerTarget, ListenerKind)>,
    next_listener: u64,
    requests: Vec<TerminalRequest>,
}

impl DeckViewport {
    #[must_use]
    pub fn new(sections: SectionList, height: u16, scroll_duration: Duration) -> Self {
        let mut overflow = HashMap::new();
        overflow.insert(ScrollScope::container(DECK_CONTAINER), Overflow::Auto);
        Self {
            sections,
            height,
            offset: 0,
            animation: None,
            scroll_duration,
            overflow,
            listeners: HashMap::new(),
            next_listener: 0,
            requests: Vec::new(),
        }
    }

    #[must_use]
    pub fn container_scope() -> ScrollScope {
        ScrollScope::container(DECK_CONTAINER)
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Line offset of the top of the pane.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    /// Height of one section; never zero.
    #[must_use]
    pub fn section_height(&self) -> u16 {
        self.height.max(1)
    }

    #[must_use]
    pub fn content_height(&self) -> u32 {
        let sections = u32::try_from(self.sections.len()).unwrap_or(u32::MAX);
        u32::from(self.section_height()).saturating_mul(sections)
    }

    #[must_use]
    pub fn max_offset(&self) -> u32 {
        self.content_height().saturating_sub(u32::from(self.height))
    }

    /// Index of the section whose top half covers the pane's first line.
    #[must_use]
    pub fn section_at_top(&self) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        let index = (self.offset / u32::from(self.section_height())) as usize;
        Some(index.min(self.sections.last_index()))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether user-driven scrolling may move the pane.
    #[must_use]
    pub fn allows_native_scroll(&self) -> bool {
        self.overflow(&ScrollScope::Document).allows_scroll()
            && self.overflow(&Self::container_scope()).allows_scroll()
    }

    #[must_use]
    pub fn has_listener(&self, kind: ListenerKind) -> bool {
        self.listeners.values().any(|(_, k)| *k == kind)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn take_requests(&mut self) -> Vec<TerminalRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn set_sections(&mut self, sections: SectionList) {
        self.sections = sections;
        self.animation = None;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Changes the pane height, keeping the same section at the top.
    ///
    /// An in-flight smooth scroll is finished at once: the pane lands on the
    /// section the animation was heading for.
    pub fn resize(&mut self, height: u16) {
        if height == self.height {
            return;
        }
        let old = u32::from(self.section_height());
        let anchor = self
            .animation
            .take()
            .map_or(self.offset, |animation| animation.target());
        let top = anchor / old;
        let within = anchor % old;
        self.height = height;
        let new = u32::from(self.section_height());
        let offset = top.saturating_mul(new).saturating_add(within.min(new - 1));
        self.offset = offset.min(self.max_offset());
    }

    /// Moves the pane by `delta` lines. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if !self.allows_native_scroll() {
            return false;
        }
        let target = (i64::from(self.offset) + i64::from(delta))
            .clamp(0, i64::from(self.max_offset()));
        self.jump_to(target as u32)
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_by(i32::from(self.section_height()))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-i32::from(self.section_height()))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        if !self.allows_native_scroll() {
            return false;
        }
        self.jump_to(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        if !self.allows_native_scroll() {
            return false;
        }
        self.jump_to(self.max_offset())
    }

    /// Follows an in-page link to section `index`.
    pub fn scroll_to_section(&mut self, index: usize) -> bool {
        if !self.allows_native_scroll() {
            return false;
        }
        let Some(id) = self.sections.get(index).cloned() else {
            return false;
        };
        self.scroll_into_view(&id, ScrollIntoView::SMOOTH_START)
    }

    /// Advances an in-flight smooth scroll.
    pub fn tick(&mut self, delta: Duration) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.advance(delta);
        self.offset = animation.offset();
        if animation.phase() == AnimPhase::Completed {
            self.offset = animation.target();
            self.animation = None;
        }
    }

    fn jump_to(&mut self, offset: u32) -> bool {
        self.animation = None;
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }

    fn section_top(&self, index: usize, block: ScrollBlock) -> u32 {
        let height = u32::from(self.section_height());
        let top = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(height);
        let target = match block {
            ScrollBlock::Start => top,
        };
        target.min(self.max_offset())
    }

    fn wheel_listeners(&self) -> usize {
        self.listeners
            .values()
            .filter(|(_, kind)| *kind == ListenerKind::Wheel)
            .count()
    }
}

impl ScrollHost for DeckViewport {
    fn overflow(&self, scope: &ScrollScope) -> Overflow {
        self.overflow.get(scope).copied().unwrap_or_default()
    }

    fn set_overflow(&mut self, scope: &ScrollScope, value: Overflow) {
        self.overflow.insert(scope.clone(), value);
    }

    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        if kind == ListenerKind::Wheel && self.wheel_listeners() == 0 {
            self.requests.push(TerminalRequest::EnableMouseCapture);
        }
        self.next_listener += 1;
        let id = ListenerId::new(self.next_listener);
        self.listeners.insert(id, (target, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let Some((_, kind)) = self.listeners.remove(&id) else {
            return;
        };
        if kind == ListenerKind::Wheel && self.wheel_listeners() == 0 {
            self.requests.push(TerminalRequest::DisableMouseCapture);
        }
    }

    fn scroll_into_view(&mut self, id: &SectionId, options: ScrollIntoView) -> bool {
        let Some(index) = self.sections.position(id) else {
            return false;
        };
        let target = self.section_top(index, options.block);
        match options.behavior {
            ScrollBehavior::Smooth if !self.scroll_duration.is_zero() && target != self.offset => {
                self.animation = Some(ScrollAnimation::new(
                    self.offset,
                    target,
                    self.scroll_duration,
                ));
            }
            ScrollBehavior::Smooth | ScrollBehavior::Instant => {
                self.jump_to(target);
            }
        }
        true
    }
}
