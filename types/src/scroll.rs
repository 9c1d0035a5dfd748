//! Scroll host vocabulary: overflow values, scroll scopes and
//! scroll-into-view options.

use std::fmt;

/// Vertical overflow setting of a scroll scope.
///
/// `Unset` is a real value: it is what a scope reports before anything ever
/// wrote to it, and restoring it must put `Unset` back, not a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    #[default]
    Unset,
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Clip => "clip",
            Self::Scroll => "scroll",
            Self::Auto => "auto",
        }
    }

    /// Whether user-driven (native) scrolling may move the scope.
    #[must_use]
    pub const fn allows_scroll(self) -> bool {
        !matches!(self, Self::Hidden | Self::Clip)
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("<unset>"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Which scrollable element a navigator controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollScope {
    /// The whole-document scroll root.
    Document,
    /// A named scrollable container inside the document.
    Container(String),
}

impl ScrollScope {
    #[must_use]
    pub fn container(name: impl Into<String>) -> Self {
        Self::Container(name.into())
    }
}

impl fmt::Display for ScrollScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("document"),
            Self::Container(name) => write!(f, "container:{name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump immediately.
    #[default]
    Instant,
    /// Animate towards the target.
    Smooth,
}

/// Where the target lands in the viewport. Sections are always aligned to
/// the start of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoView {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollIntoView {
    /// Smooth animation, aligned to the start of the viewport.
    pub const SMOOTH_START: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };

    pub const INSTANT_START: Self = Self {
        behavior: ScrollBehavior::Instant,
        block: ScrollBlock::Start,
    };
}
