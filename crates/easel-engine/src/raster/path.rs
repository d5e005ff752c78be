use tiny_skia::{Path, PathBuilder, Rect};

use crate::coords::CornerRadii;

// Cubic control-point offset for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Rounded rectangle outline with per-corner radii.
///
/// Each radius is clamped to half the shorter side. Zero radii give square
/// corners.
pub(crate) fn rounded_rect(rect: Rect, radii: CornerRadii) -> Option<Path> {
    let (x0, y0, x1, y1) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let limit = rect.width().min(rect.height()) / 2.0;
    let clamp = |r: f32| r.clamp(0.0, limit);
    let (tl, tr, br, bl) = (
        clamp(radii.top_left),
        clamp(radii.top_right),
        clamp(radii.bottom_right),
        clamp(radii.bottom_left),
    );
    let k = 1.0 - KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + tl, y0);
    pb.line_to(x1 - tr, y0);
    pb.cubic_to(x1 - tr * k, y0, x1, y0 + tr * k, x1, y0 + tr);
    pb.line_to(x1, y1 - br);
    pb.cubic_to(x1, y1 - br * k, x1 - br * k, y1, x1 - br, y1);
    pb.line_to(x0 + bl, y1);
    pb.cubic_to(x0 + bl * k, y1, x0, y1 - bl * k, x0, y1 - bl);
    pb.line_to(x0, y0 + tl);
    pb.cubic_to(x0, y0 + tl * k, x0 + tl * k, y0, x0 + tl, y0);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_corners_keep_the_rect_bounds() {
        let rect = Rect::from_xywh(2.0, 3.0, 10.0, 6.0).unwrap();
        let path = rounded_rect(rect, CornerRadii::zero()).unwrap();
        assert_eq!(path.bounds(), rect);
    }

    #[test]
    fn oversized_radii_are_clamped_to_the_shape() {
        let rect = Rect::from_xywh(0.0, 0.0, 10.0, 4.0).unwrap();
        let path = rounded_rect(rect, CornerRadii::all(50.0)).unwrap();
        assert_eq!(path.bounds(), rect);
    }

    #[test]
    fn inset_radii_floor_at_zero() {
        let r = CornerRadii::new(6.0, 1.0, 0.0, 3.0).inset(2.0);
        assert_eq!(r, CornerRadii::new(4.0, 0.0, 0.0, 1.0));
    }
}
