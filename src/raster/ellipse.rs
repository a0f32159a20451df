use egui::Color32;

use crate::buffer::PixelBuffer;
use crate::geometry::Point;

/// Rasterize the outline of the ellipse inscribed in the axis-aligned
/// rectangle spanned by `p0` and `p1`.
///
/// The corners may come in any order; they are normalized to min/max per
/// axis before stepping. The walk is the integer midpoint-ellipse algorithm
/// plotting all four quadrants by symmetry from a single error term, so the
/// outline pixels are the nearest-integer approximation of the analytic
/// ellipse. A rectangle with zero width or height collapses to a line, and
/// a single point to one pixel. Outline only, no fill.
///
/// `color_fn` picks the color per plotted pixel; where quadrants meet it
/// may be consulted more than once for the same pixel.
pub fn draw_in_rect<F>(buffer: &mut PixelBuffer, p0: Point, p1: Point, mut color_fn: F)
where
    F: FnMut(Point) -> Color32,
{
    let mut x0 = p0.x;
    let mut y0 = p0.y;
    let mut x1 = p1.x;
    let mut y1 = p1.y;

    let a = (x1 - x0).abs() as i64;
    let b = (y1 - y0).abs() as i64;
    let odd_height = b & 1;

    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (odd_height + 1) * a * a;
    let mut err = dx + dy + odd_height * a * a;

    if x0 > x1 {
        x0 = x1;
        x1 += a as i32;
    }
    if y0 > y1 {
        y0 = y1;
    }
    // Start at the vertical midpoint; for odd heights the two middle rows
    // straddle the true center.
    y0 += ((b + 1) / 2) as i32;
    y1 = y0 - odd_height as i32;

    let a8 = 8 * a * a;
    let b8 = 8 * b * b;

    let mut plot = |buffer: &mut PixelBuffer, x: i32, y: i32| {
        let p = Point::new(x, y);
        let color = color_fn(p);
        buffer.set(p, color);
    };

    loop {
        plot(buffer, x1, y0);
        plot(buffer, x0, y0);
        plot(buffer, x0, y1);
        plot(buffer, x1, y1);
        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += a8;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += b8;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    // Narrow ellipses exhaust the x walk before the vertical tips are
    // reached; finish the tip rows column by column.
    while i64::from(y0 - y1) <= b {
        plot(buffer, x0 - 1, y0);
        plot(buffer, x1 + 1, y0);
        y0 += 1;
        plot(buffer, x0 - 1, y1);
        plot(buffer, x1 + 1, y1);
        y1 -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn outline(p0: Point, p1: Point) -> BTreeSet<(i32, i32)> {
        let mut buf = PixelBuffer::new(64, 64);
        let mut points = BTreeSet::new();
        draw_in_rect(&mut buf, p0, p1, |p| {
            points.insert((p.x, p.y));
            Color32::BLACK
        });
        points
    }

    #[test]
    fn single_point_rect_is_one_pixel() {
        let points = outline(Point::new(5, 5), Point::new(5, 5));
        assert_eq!(points.into_iter().collect::<Vec<_>>(), vec![(5, 5)]);
    }

    #[test]
    fn zero_height_rect_collapses_to_a_row() {
        let points = outline(Point::new(2, 4), Point::new(6, 4));
        let expected: BTreeSet<_> = (2..=6).map(|x| (x, 4)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn zero_width_rect_collapses_to_a_column() {
        let points = outline(Point::new(3, 1), Point::new(3, 6));
        let expected: BTreeSet<_> = (1..=6).map(|y| (3, y)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn corner_order_does_not_matter() {
        let a = Point::new(2, 3);
        let b = Point::new(11, 9);
        let reference = outline(a, b);
        // Full swap and single-axis swaps of the corner coordinates.
        assert_eq!(outline(b, a), reference);
        assert_eq!(
            outline(Point::new(b.x, a.y), Point::new(a.x, b.y)),
            reference
        );
        assert_eq!(
            outline(Point::new(a.x, b.y), Point::new(b.x, a.y)),
            reference
        );
    }

    #[test]
    fn outline_touches_all_four_rect_edges_and_stays_inside() {
        let points = outline(Point::new(1, 1), Point::new(8, 8));
        assert!(points.iter().all(|&(x, y)| (1..=8).contains(&x) && (1..=8).contains(&y)));
        assert!(points.iter().any(|&(x, _)| x == 1));
        assert!(points.iter().any(|&(x, _)| x == 8));
        assert!(points.iter().any(|&(_, y)| y == 1));
        assert!(points.iter().any(|&(_, y)| y == 8));
    }

    #[test]
    fn outline_is_symmetric_about_the_rect_center() {
        // 3x3 rect: center pixel (5, 5); the outline is the 4-neighbour
        // diamond around it.
        let points = outline(Point::new(4, 4), Point::new(6, 6));
        let expected: BTreeSet<_> = [(4, 5), (6, 5), (5, 4), (5, 6)].into_iter().collect();
        assert_eq!(points, expected);

        // Even spans have no center pixel; symmetry maps x to (min+max)-x.
        let points = outline(Point::new(0, 0), Point::new(9, 5));
        for &(x, y) in &points {
            assert!(points.contains(&(9 - x, y)), "missing mirror of ({x},{y})");
            assert!(points.contains(&(x, 5 - y)), "missing mirror of ({x},{y})");
        }
    }

    #[test]
    fn narrow_ellipse_reaches_its_vertical_tips() {
        let points = outline(Point::new(4, 0), Point::new(5, 3));
        assert!(points.iter().any(|&(_, y)| y == 0));
        assert!(points.iter().any(|&(_, y)| y == 3));
        assert!(points.iter().all(|&(x, y)| (4..=5).contains(&x) && (0..=3).contains(&y)));
    }
}
