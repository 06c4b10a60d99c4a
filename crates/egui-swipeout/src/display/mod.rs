use crate::types::Side;
use crate::view::{SwipeAction, SwipeoutView};
use egui::{Align, Align2, FontId, Layout, Painter, Pos2, Rect, Ui, UiBuilder, Vec2};

/// Where things ended up on screen this frame.
pub(crate) struct RowLayout {
    pub content: Rect,
    pub actions: Vec<(Side, usize, Rect)>,
}

impl RowLayout {
    /// The visible action under `pos`, if the content surface is not covering it.
    pub fn action_at(&self, pos: Pos2) -> Option<(Side, usize)> {
        if self.content.contains(pos) {
            return None;
        }
        // topmost first
        self.actions
            .iter()
            .rev()
            .find(|(_, _, rect)| rect.contains(pos))
            .map(|(side, index, _)| (*side, *index))
    }
}

impl SwipeoutView<'_> {
    pub(crate) fn paint(
        &self,
        ui: &mut Ui,
        rect: Rect,
        add_contents: impl FnOnce(&mut Ui),
    ) -> RowLayout {
        let painter = ui.painter().with_clip_rect(rect.intersect(ui.clip_rect()));
        let offset = self.swipeout.displayed_offset();
        let groups = self.swipeout.groups();

        let mut shifts = self.swipeout.shifts();
        // lower stacking first, so the frontmost item is painted last
        shifts.sort_by_key(|shift| shift.z_order.unwrap_or(0));

        let mut actions = Vec::with_capacity(shifts.len());
        for shift in shifts {
            let Some(action) = self.action(shift.side, shift.index) else {
                continue;
            };
            let group = groups.get(shift.side);
            let Some(item) = group.items().get(shift.index) else {
                continue;
            };

            // natural container position sits just outside the row edge
            let container_left = match shift.side {
                Side::Left => rect.left() - group.width(),
                Side::Right => rect.right(),
            };
            let item_rect = Rect::from_min_size(
                Pos2::new(container_left + item.offset_left + shift.translate_x, rect.top()),
                Vec2::new(item.width, rect.height()),
            );

            paint_action(&painter, item_rect, action, &self.font);
            actions.push((shift.side, shift.index, item_rect));
        }

        let content = rect.translate(Vec2::new(offset, 0.0));
        let fill = self.content_fill.unwrap_or(ui.visuals().panel_fill);
        painter.rect_filled(content, 0.0, fill);

        let mut child = ui.new_child(
            UiBuilder::new()
                .max_rect(content.shrink2(Vec2::new(self.padding, 0.0)))
                .layout(Layout::left_to_right(Align::Center)),
        );
        child.set_clip_rect(painter.clip_rect());
        add_contents(&mut child);

        RowLayout { content, actions }
    }

    fn action(&self, side: Side, index: usize) -> Option<&SwipeAction> {
        match side {
            Side::Left => self.left.get(index),
            Side::Right => self.right.get(index),
        }
    }
}

fn paint_action(painter: &Painter, rect: Rect, action: &SwipeAction, font: &FontId) {
    if !painter.clip_rect().intersects(rect) {
        return;
    }
    painter.rect_filled(rect, 0.0, action.fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &action.label,
        font.clone(),
        action.text_color,
    );
}
