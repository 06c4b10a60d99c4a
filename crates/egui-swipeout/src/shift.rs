//! Per-item transforms for the action buttons behind a panel.
//!
//! Each group's container rests just outside the panel, against the edge it is
//! revealed from: the left container spans `[-width, 0]`, the right one
//! `[panel_width, panel_width + width]`. Transforms are horizontal translations
//! applied to every item's natural position inside its container.

use crate::types::{GroupWidths, Side};

/// Position and size of one action item inside its group container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemLayout {
    pub offset_left: f32,
    pub width: f32,
}

impl ItemLayout {
    pub fn new(offset_left: f32, width: f32) -> Self {
        Self {
            offset_left: finite_or_zero(offset_left),
            width: finite_or_zero(width).max(0.0),
        }
    }

    #[inline]
    fn offset_right(&self) -> f32 {
        self.offset_left + self.width
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionGroup {
    items: Vec<ItemLayout>,
}

impl ActionGroup {
    pub fn new(items: Vec<ItemLayout>) -> Self {
        Self { items }
    }

    /// Lays items out edge to edge in order.
    pub fn from_widths(widths: impl IntoIterator<Item = f32>) -> Self {
        let mut offset_left = 0.0;
        let items = widths
            .into_iter()
            .map(|width| {
                let item = ItemLayout::new(offset_left, width);
                offset_left += item.width;
                item
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ItemLayout] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0
    }

    /// Width of the container wrapping every item.
    pub fn width(&self) -> f32 {
        self.items
            .iter()
            .map(ItemLayout::offset_right)
            .fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionGroups {
    pub left: ActionGroup,
    pub right: ActionGroup,
}

impl ActionGroups {
    pub fn new(left: ActionGroup, right: ActionGroup) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> &ActionGroup {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn widths(&self) -> GroupWidths {
        GroupWidths::new(self.left.width(), self.right.width())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionShift {
    pub side: Side,
    pub index: usize,
    pub translate_x: f32,
    /// How far the item's group is revealed, in `[0, 1]`.
    pub progress: f32,
    /// Stacking order inside the group, higher is drawn on top. Only set when
    /// the group has more than one item.
    pub z_order: Option<usize>,
}

/// Computes the transform of every action item for a surface at `offset`.
///
/// With `locked_to` set, only that side's group may move out of hiding; the
/// other stays collapsed whatever the offset says.
pub fn action_shifts(
    offset: f32,
    groups: &ActionGroups,
    locked_to: Option<Side>,
) -> Vec<ActionShift> {
    let offset = finite_or_zero(offset);
    let mut shifts = Vec::with_capacity(groups.left.items.len() + groups.right.items.len());

    for side in [Side::Left, Side::Right] {
        let group = groups.get(side);
        let width = group.width();
        let progress = if locked_to.is_some_and(|locked| locked != side) {
            0.0
        } else {
            reveal_progress(offset, side, width)
        };
        let z_orders = stacking(group, side);

        for (index, item) in group.items.iter().enumerate() {
            let translate_x = match side {
                Side::Left => {
                    let hidden = width - item.offset_right();
                    progress * width + (1.0 - progress) * hidden
                }
                Side::Right => -progress * width - (1.0 - progress) * item.offset_left,
            };
            shifts.push(ActionShift {
                side,
                index,
                translate_x,
                progress,
                z_order: z_orders.as_ref().map(|orders| orders[index]),
            });
        }
    }

    shifts
}

/// `|offset| / width` toward `side`, clamped to `[0, 1]`. Zero for an empty
/// group or an offset pointing at the other side.
pub fn reveal_progress(offset: f32, side: Side, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (side.sign() * offset / width).clamp(0.0, 1.0)
}

// The item nearest the content edge is frontmost.
fn stacking(group: &ActionGroup, side: Side) -> Option<Vec<usize>> {
    let count = group.items.len();
    if count < 2 {
        return None;
    }

    let width = group.width();
    let distance = |item: &ItemLayout| match side {
        Side::Left => width - item.offset_right(),
        Side::Right => item.offset_left,
    };

    let mut ranked: Vec<usize> = (0..count).collect();
    ranked.sort_by(|&a, &b| {
        distance(&group.items[a])
            .total_cmp(&distance(&group.items[b]))
            .then(a.cmp(&b))
    });

    let mut orders = vec![0; count];
    for (rank, index) in ranked.into_iter().enumerate() {
        orders[index] = count - rank;
    }
    Some(orders)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
