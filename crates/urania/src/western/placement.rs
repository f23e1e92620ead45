use crate::angle::{forward_arc, normalize_degrees};

/// House (1-12) containing `longitude`, given twelve cusps in house order.
///
/// House `i` spans the forward arc from `cusps[i]` up to (not including)
/// `cusps[i + 1]`, wrapping through 0 degrees where needed. If rounding leaves
/// the point outside every arc, the house whose cusp is nearest behind it wins,
/// ties going to the lower house number.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let point = normalize_degrees(longitude);

    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let span = forward_arc(start, end);
        let offset = forward_arc(start, point);
        if span > 0.0 && offset < span {
            return (i + 1) as u8;
        }
    }

    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &cusp) in cusps.iter().enumerate() {
        let distance = forward_arc(cusp, point);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    log::debug!(
        "longitude {} fell between house arcs; assigned to house {}",
        point,
        best + 1
    );
    (best + 1) as u8
}
