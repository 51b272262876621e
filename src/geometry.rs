//! The letter "F", as six triangles in pixel space.

/// Vertices in the buffer.
pub const VERTEX_COUNT: i32 = 18;

/// Components per vertex (x, y).
pub const COMPONENTS: i32 = 2;

#[rustfmt::skip]
pub const F_VERTICES: [f32; 36] = [
    // left column
    0.0, 0.0,
    30.0, 0.0,
    0.0, 150.0,
    0.0, 150.0,
    30.0, 0.0,
    30.0, 150.0,

    // top rung
    30.0, 0.0,
    100.0, 0.0,
    30.0, 30.0,
    30.0, 30.0,
    100.0, 0.0,
    100.0, 30.0,

    // middle rung
    30.0, 60.0,
    67.0, 60.0,
    30.0, 90.0,
    30.0, 90.0,
    67.0, 60.0,
    67.0, 90.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_holds_exactly_the_drawn_vertices() {
        assert_eq!(F_VERTICES.len() as i32, VERTEX_COUNT * COMPONENTS);
        assert_eq!(VERTEX_COUNT % 3, 0);
    }

    #[test]
    fn shape_fits_in_100_by_150() {
        for p in F_VERTICES.chunks(2) {
            assert!((0.0..=100.0).contains(&p[0]), "x out of range: {p:?}");
            assert!((0.0..=150.0).contains(&p[1]), "y out of range: {p:?}");
        }
    }

    #[test]
    fn no_degenerate_triangles() {
        for tri in F_VERTICES.chunks(6) {
            let (ax, ay, bx, by, cx, cy) = (tri[0], tri[1], tri[2], tri[3], tri[4], tri[5]);
            let area2 = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
            assert!(area2.abs() > 0.0, "degenerate triangle {tri:?}");
        }
    }
}
