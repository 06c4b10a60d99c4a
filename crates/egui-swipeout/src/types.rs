/// Offsets closer than this many pixels are treated as the same position.
pub const OFFSET_EPSILON: f32 = 0.5;

#[inline]
pub fn same_offset(a: f32, b: f32) -> bool {
    (a - b).abs() <= OFFSET_EPSILON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Actions laid out left of the content, revealed by a positive offset.
    Left,
    /// Actions laid out right of the content, revealed by a negative offset.
    Right,
}

impl Side {
    /// Which side a signed offset or delta points at, `None` for zero.
    pub fn from_offset(offset: f32) -> Option<Side> {
        if offset > 0.0 {
            Some(Side::Left)
        } else if offset < 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// `+1` for the left group, `-1` for the right group.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Measured widths of both action groups. A group that could not be measured,
/// or has nothing in it, has width zero and can never be revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupWidths {
    pub left: f32,
    pub right: f32,
}

impl GroupWidths {
    pub fn new(left: f32, right: f32) -> Self {
        Self {
            left: sanitize_width(left),
            right: sanitize_width(right),
        }
    }

    pub fn get(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_revealable(&self, side: Side) -> bool {
        self.get(side) > 0.0
    }

    /// The resting offset that fully reveals `side`.
    pub fn reveal_offset(&self, side: Side) -> f32 {
        side.sign() * self.get(side)
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(-self.right, self.left)
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Cumulative pointer travel since the gesture's press origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureSample {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl GestureSample {
    pub fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }

    pub fn horizontal(delta_x: f32) -> Self {
        Self::new(delta_x, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.delta_x.is_finite() && self.delta_y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Start(GestureSample),
    Move(GestureSample),
    End(GestureSample),
}
