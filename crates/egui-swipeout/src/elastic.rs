use crate::options::{ElasticPolicy, SwipeoutOptions};
use crate::types::{GroupWidths, Side};

/// Sub-linear damping of drag distance past a limit.
///
/// For `excess > 1` and `exponent` in `(0, 1)` the result is strictly smaller
/// than `excess`, and it keeps growing, so the surface still follows the
/// pointer, only more reluctantly the further it goes.
#[inline]
pub fn compress(excess: f32, exponent: f32) -> f32 {
    if excess > 0.0 {
        excess.powf(exponent)
    } else {
        0.0
    }
}

/// Maps a raw drag position to the offset actually applied to the surface.
///
/// `territory` is the side the drag was revealing when it started. Leaving
/// that side's territory across zero is resisted under
/// [`ElasticPolicy::CrossBoundary`] and forbidden under a direction lock.
/// Travel past the full width of the group being revealed is resisted under
/// every policy.
pub fn elastic_offset(
    candidate: f32,
    territory: Option<Side>,
    widths: GroupWidths,
    options: &SwipeoutOptions,
) -> f32 {
    if !candidate.is_finite() {
        return 0.0;
    }

    if let Some(side) = territory {
        // positive once the candidate is on the other side of zero
        let crossed = -side.sign() * candidate;
        if crossed > 0.0 {
            if options.direction_lock {
                return 0.0;
            }
            if options.elasticity == ElasticPolicy::CrossBoundary {
                return side.opposite().sign() * compress(crossed, options.exponent);
            }
        }
    }

    if candidate > widths.left {
        widths.left + compress(candidate - widths.left, options.exponent)
    } else if candidate < -widths.right {
        -(widths.right + compress(-widths.right - candidate, options.exponent))
    } else {
        candidate
    }
}
