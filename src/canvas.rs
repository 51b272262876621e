/// Backing-store size for a canvas displayed at `client_w` × `client_h`
/// CSS pixels. Fractional pixels are truncated.
pub fn backing_size(client_w: i32, client_h: i32, multiplier: f64) -> (u32, u32) {
    let scale = |v: i32| (v.max(0) as f64 * multiplier).max(0.0) as u32;
    (scale(client_w), scale(client_h))
}

/// Returns the new size when it differs from `current`.
pub fn resize_needed(current: (u32, u32), client: (i32, i32), multiplier: f64) -> Option<(u32, u32)> {
    let want = backing_size(client.0, client.1, multiplier);
    (want != current).then_some(want)
}
