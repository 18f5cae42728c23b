//! Static icon lookup for planner chrome.
//!
//! Icons are resolved from a closed enum at startup instead of by dynamic
//! name lookup at render time.

use crate::calendar::ViewMode;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Icons used by the planner shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IconName {
    Plus,
    Edit,
    Trash,
    X,
    Check,
    ChevronLeft,
    ChevronRight,
    StickyNote,
    Clock,
    CalendarDays,
    CalendarRange,
    Calendar,
}

const ALL_ICONS: &[IconName] = &[
    IconName::Plus,
    IconName::Edit,
    IconName::Trash,
    IconName::X,
    IconName::Check,
    IconName::ChevronLeft,
    IconName::ChevronRight,
    IconName::StickyNote,
    IconName::Clock,
    IconName::CalendarDays,
    IconName::CalendarRange,
    IconName::Calendar,
];

impl IconName {
    /// Name as referenced by the shell (`ChevronLeft`, `StickyNote`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "Plus",
            Self::Edit => "Edit",
            Self::Trash => "Trash",
            Self::X => "X",
            Self::Check => "Check",
            Self::ChevronLeft => "ChevronLeft",
            Self::ChevronRight => "ChevronRight",
            Self::StickyNote => "StickyNote",
            Self::Clock => "Clock",
            Self::CalendarDays => "CalendarDays",
            Self::CalendarRange => "CalendarRange",
            Self::Calendar => "Calendar",
        }
    }

    /// Text glyph for terminal and plain-text renderers.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Edit => "✎",
            Self::Trash => "🗑",
            Self::X => "✕",
            Self::Check => "✓",
            Self::ChevronLeft => "‹",
            Self::ChevronRight => "›",
            Self::StickyNote => "🗒",
            Self::Clock => "🕘",
            Self::CalendarDays => "📅",
            Self::CalendarRange => "🗓",
            Self::Calendar => "📆",
        }
    }
}

impl Display for IconName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns every known icon.
pub fn all_icons() -> &'static [IconName] {
    ALL_ICONS
}

/// Resolves an icon by its shell name.
pub fn parse_icon_name(value: &str) -> Result<IconName, IconError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(IconError::EmptyName);
    }
    ALL_ICONS
        .iter()
        .copied()
        .find(|icon| icon.as_str() == normalized)
        .ok_or_else(|| IconError::UnknownIcon(normalized.to_string()))
}

impl ViewMode {
    /// Icon shown next to the view-selector label.
    pub fn icon(self) -> IconName {
        match self {
            Self::Daily => IconName::Clock,
            Self::Weekly => IconName::CalendarDays,
            Self::Monthly => IconName::CalendarRange,
        }
    }
}

/// Icon lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    EmptyName,
    UnknownIcon(String),
}

impl Display for IconError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "icon name must not be empty"),
            Self::UnknownIcon(value) => write!(f, "unknown icon: {value}"),
        }
    }
}

impl Error for IconError {}
