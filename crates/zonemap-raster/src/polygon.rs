//! Polygon scan conversion and hit-testing in integer screen space.
//!
//! Outlines are 1 px wide and unantialiased so the boundary color is exact;
//! the flood fill depends on that.

use crate::{IVec2, Raster, Rgba8};

/// Draws a 1 px line from `a` to `b` inclusive (Bresenham), clipped to the raster.
pub fn draw_line(raster: &mut Raster, a: IVec2, b: IVec2, color: Rgba8) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };

    let mut err = dx + dy;
    let mut p = a;
    loop {
        raster.set(p, color);
        if p == b {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
    }
}

/// Draws the closed outline through `points`.
pub fn stroke_polygon(raster: &mut Raster, points: &[IVec2], color: Rgba8) {
    let n = points.len();
    match n {
        0 => {}
        1 => {
            raster.set(points[0], color);
        }
        _ => {
            for i in 0..n {
                draw_line(raster, points[i], points[(i + 1) % n], color);
            }
        }
    }
}

/// Fills the polygon interior (even-odd rule, sampled at integer pixel
/// coordinates) and its outline.
pub fn fill_polygon(raster: &mut Raster, points: &[IVec2], color: Rgba8) {
    if points.len() < 3 || raster.is_empty() {
        stroke_polygon(raster, points, color);
        return;
    }

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(raster.height() as i32 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for y in min_y..=max_y {
        crossings.clear();
        for (a, b) in edges(points) {
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            // Half-open in y so a shared vertex is counted once.
            if y < lo.y || y >= hi.y {
                continue;
            }
            let t = (y - lo.y) as f64 / (hi.y - lo.y) as f64;
            crossings.push(lo.x as f64 + t * (hi.x - lo.x) as f64);
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].ceil() as i32;
            let x1 = pair[1].floor() as i32;
            if x0 <= x1 {
                raster.fill_span(y, x0, x1, color);
            }
        }
    }

    stroke_polygon(raster, points, color);
}

/// Returns `true` when `p` lies inside the polygon or on its outline.
///
/// Even-odd rule; the polygon does not need to be rasterized first.
pub fn contains_point(points: &[IVec2], p: IVec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    if edges(points).any(|(a, b)| on_segment(a, b, p)) {
        return true;
    }

    let (px, py) = (p.x as f64, p.y as f64);
    let mut inside = false;
    for (a, b) in edges(points) {
        let (ax, ay, bx, by) = (a.x as f64, a.y as f64, b.x as f64, b.y as f64);
        if (ay > py) != (by > py) {
            let x_cross = ax + (py - ay) * (bx - ax) / (by - ay);
            if px < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn edges(points: &[IVec2]) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

fn on_segment(a: IVec2, b: IVec2, p: IVec2) -> bool {
    let cross = (b.x - a.x) as i64 * (p.y - a.y) as i64 - (b.y - a.y) as i64 * (p.x - a.x) as i64;
    cross == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> [IVec2; 4] {
        [p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)]
    }

    fn count(r: &Raster, c: Rgba8) -> usize {
        r.pixels().iter().filter(|&&px| px == c).count()
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_is_inclusive() {
        let mut r = Raster::new(10, 3, Rgba8::WHITE);
        draw_line(&mut r, p(2, 1), p(6, 1), Rgba8::BLACK);
        assert_eq!(count(&r, Rgba8::BLACK), 5);
        assert_eq!(r.get(p(2, 1)), Some(Rgba8::BLACK));
        assert_eq!(r.get(p(6, 1)), Some(Rgba8::BLACK));
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut r = Raster::new(10, 10, Rgba8::WHITE);
        draw_line(&mut r, p(7, 1), p(1, 8), Rgba8::BLACK);
        assert_eq!(r.get(p(7, 1)), Some(Rgba8::BLACK));
        assert_eq!(r.get(p(1, 8)), Some(Rgba8::BLACK));
    }

    #[test]
    fn line_partially_off_raster_is_clipped() {
        let mut r = Raster::new(4, 4, Rgba8::WHITE);
        draw_line(&mut r, p(-5, 2), p(10, 2), Rgba8::BLACK);
        assert_eq!(count(&r, Rgba8::BLACK), 4);
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn stroked_square_is_closed() {
        let mut r = Raster::new(8, 8, Rgba8::WHITE);
        stroke_polygon(&mut r, &square(1, 1, 5, 5), Rgba8::BLACK);
        // 5x5 ring = 25 - 3x3 interior.
        assert_eq!(count(&r, Rgba8::BLACK), 16);
        assert_eq!(r.get(p(3, 3)), Some(Rgba8::WHITE));
    }

    // ── filled ────────────────────────────────────────────────────────────

    #[test]
    fn filled_square_covers_interior_and_outline() {
        let mut r = Raster::new(8, 8, Rgba8::WHITE);
        fill_polygon(&mut r, &square(1, 1, 5, 5), Rgba8::RED);
        assert_eq!(count(&r, Rgba8::RED), 25);
        assert_eq!(r.get(p(0, 0)), Some(Rgba8::WHITE));
        assert_eq!(r.get(p(6, 6)), Some(Rgba8::WHITE));
    }

    #[test]
    fn filled_triangle_stays_within_bounds() {
        let mut r = Raster::new(20, 20, Rgba8::WHITE);
        let tri = [p(2, 2), p(16, 2), p(2, 16)];
        fill_polygon(&mut r, &tri, Rgba8::BLUE);
        assert_eq!(r.get(p(4, 4)), Some(Rgba8::BLUE));
        assert_eq!(r.get(p(15, 15)), Some(Rgba8::WHITE));
        for y in 0..20 {
            for x in 0..20 {
                if r.get(p(x, y)) == Some(Rgba8::BLUE) {
                    assert!(contains_point(&tri, p(x, y)), "({x}, {y}) painted outside");
                }
            }
        }
    }

    #[test]
    fn filled_polygon_clips_to_raster() {
        let mut r = Raster::new(10, 10, Rgba8::WHITE);
        fill_polygon(&mut r, &square(-20, -20, 40, 40), Rgba8::GREEN);
        assert_eq!(count(&r, Rgba8::GREEN), 100);
    }

    #[test]
    fn filled_concave_polygon_leaves_notch_empty() {
        // U shape: notch between x=4..6 from y=0..5 stays empty.
        let u = [p(0, 0), p(3, 0), p(3, 5), p(7, 5), p(7, 0), p(10, 0), p(10, 9), p(0, 9)];
        let mut r = Raster::new(12, 12, Rgba8::WHITE);
        fill_polygon(&mut r, &u, Rgba8::RED);
        assert_eq!(r.get(p(5, 2)), Some(Rgba8::WHITE));
        assert_eq!(r.get(p(1, 2)), Some(Rgba8::RED));
        assert_eq!(r.get(p(5, 7)), Some(Rgba8::RED));
    }

    // ── hit-testing ───────────────────────────────────────────────────────

    #[test]
    fn contains_interior_and_outline() {
        let sq = square(100, 100, 300, 300);
        assert!(contains_point(&sq, p(200, 200)));
        assert!(contains_point(&sq, p(100, 100)));
        assert!(contains_point(&sq, p(300, 250)));
        assert!(!contains_point(&sq, p(99, 200)));
        assert!(!contains_point(&sq, p(301, 200)));
    }

    #[test]
    fn contains_respects_concavity() {
        let u = [p(0, 0), p(3, 0), p(3, 5), p(7, 5), p(7, 0), p(10, 0), p(10, 9), p(0, 9)];
        assert!(!contains_point(&u, p(5, 2)));
        assert!(contains_point(&u, p(5, 7)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        assert!(!contains_point(&[p(0, 0), p(5, 5)], p(1, 1)));
    }
}
