//! Row action menu.
//!
//! Tracks which row's menu is open (at most one per table) and carries the
//! declarative list of actions a screen exposes for its records.

use crate::core::record::RecordId;

/// Styling hint for an action; behaviour is identical for both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Default,
    Danger,
}

type Handler<T> = Box<dyn Fn(&T)>;
type Visibility<T> = Box<dyn Fn(&T) -> bool>;

/// One entry of a row menu.
pub struct RowAction<T> {
    pub icon: String,
    pub label: String,
    pub variant: ActionVariant,
    handler: Handler<T>,
    visible_when: Option<Visibility<T>>,
}

impl<T> RowAction<T> {
    pub fn new(
        icon: impl Into<String>,
        label: impl Into<String>,
        handler: impl Fn(&T) + 'static,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            variant: ActionVariant::Default,
            handler: Box::new(handler),
            visible_when: None,
        }
    }

    /// Mark as destructive
    pub fn danger(mut self) -> Self {
        self.variant = ActionVariant::Danger;
        self
    }

    /// Only offer this action for records matching `predicate`
    pub fn visible_when(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.visible_when = Some(Box::new(predicate));
        self
    }

    pub fn is_danger(&self) -> bool {
        self.variant == ActionVariant::Danger
    }

    pub fn is_visible_for(&self, record: &T) -> bool {
        self.visible_when
            .as_ref()
            .is_none_or(|predicate| predicate(record))
    }

    pub fn run(&self, record: &T) {
        (self.handler)(record);
    }
}

impl<T> std::fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowAction")
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Open-menu selection of one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMenu {
    open: Option<RecordId>,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the menu if it belongs to `id`, otherwise open it for `id`.
    /// Returns whether a menu is open afterwards.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.open.as_ref() == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id.clone());
        }
        self.open.is_some()
    }

    /// Run `action` on `record` and close the menu
    pub fn invoke<T>(&mut self, action: &RowAction<T>, record: &T) {
        action.run(record);
        self.open = None;
    }

    /// Close on outside click or page change
    pub fn dismiss(&mut self) {
        self.open = None;
    }

    pub fn open_id(&self) -> Option<&RecordId> {
        self.open.as_ref()
    }

    pub fn is_open_for(&self, id: &RecordId) -> bool {
        self.open.as_ref() == Some(id)
    }
}

/// Gap between the trigger button and the menu
pub const MENU_OFFSET: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Measured bounds of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Position a menu of `menu` size next to its trigger.
///
/// The menu hangs below the trigger with its right edge aligned to the
/// trigger's right edge. It flips above the trigger when it would run past the
/// bottom of the viewport and is shifted to stay inside the viewport
/// horizontally.
pub fn place_menu(trigger: Rect, menu: Size, viewport: Size) -> Point {
    let max_x = (viewport.width - menu.width).max(0.0);
    let x = (trigger.right() - menu.width).clamp(0.0, max_x);

    let below = trigger.bottom() + MENU_OFFSET;
    let above = trigger.y - MENU_OFFSET - menu.height;
    let y = if below + menu.height <= viewport.height || above < 0.0 {
        below.min((viewport.height - menu.height).max(0.0))
    } else {
        above
    };

    Point { x, y }
}
