use crate::coords::IntRect;

use super::{Corner, Quad};

impl<C: Corner> Quad<C> {
    /// Integer bounds of this quad.
    ///
    /// Each value is taken from one pair of corners only:
    ///
    /// | value   | source                                  |
    /// |---------|-----------------------------------------|
    /// | `min_x` | `min(top_left.x, bottom_left.x)`        |
    /// | `max_x` | `max(top_right.x, bottom_right.x)`      |
    /// | `min_y` | `min(bottom_left.y, bottom_right.y)`    |
    /// | `max_y` | `max(top_left.y, top_right.y)`          |
    ///
    /// The result is `(min_x, min_y, max_x - min_x, max_y - min_y)`, each
    /// value truncated toward zero before the extents are taken.
    ///
    /// The y pairing assumes the bottom corners have the smaller y (+Y up).
    /// A quad built with `from_rect` and a positive height in +Y-down space
    /// therefore gets a negative height, and one built with a negative width
    /// gets a negative width. Neither case is corrected.
    ///
    /// NaN handling: `f32::min`/`max` ignore a NaN operand, so a value is NaN
    /// only when both of its corners are; a NaN value truncates to `0`.
    /// Values beyond `i32` range saturate, and the extent subtraction wraps.
    pub fn bounds(&self) -> IntRect {
        let tl = self.top_left.position();
        let tr = self.top_right.position();
        let br = self.bottom_right.position();
        let bl = self.bottom_left.position();

        let min_x = tl.x.min(bl.x) as i32;
        let max_x = tr.x.max(br.x) as i32;
        let min_y = bl.y.min(br.y) as i32;
        let max_y = tl.y.max(tr.y) as i32;

        let rect = IntRect::new(min_x, min_y, max_x.wrapping_sub(min_x), max_y.wrapping_sub(min_y));
        if rect.is_inverted() {
            log::trace!("quad bounds are inverted: {rect}");
        }
        rect
    }
}
