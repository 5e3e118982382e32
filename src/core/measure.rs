//! Distanzen und Schwerpunkte in Grad-Einheiten (lng/lat).

use glam::DVec2;

/// Großkreis-Distanz zweier lng/lat-Koordinaten, ausgedrückt in Grad.
///
/// Haversine auf der Einheitskugel; der Zentriwinkel wird direkt in Grad
/// zurückgegeben. Beide Skalierungs-Strategien messen mit derselben Metrik.
pub fn distance_degrees(a: DVec2, b: DVec2) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let central = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    central.to_degrees()
}

/// Entferntester Punkt aus `coords` relativ zu `from`.
///
/// Bei Gleichstand gewinnt der zuerst gefundene; ohne Kandidaten mit
/// positiver Distanz wird `from` selbst zurückgegeben.
pub fn farthest_point(from: DVec2, coords: &[DVec2]) -> DVec2 {
    let mut farthest = from;
    let mut max_distance = 0.0;
    for &coord in coords {
        let d = distance_degrees(from, coord);
        if d > max_distance {
            max_distance = d;
            farthest = coord;
        }
    }
    farthest
}

/// Arithmetisches Mittel aller Koordinaten.
pub fn mean(coords: &[DVec2]) -> Option<DVec2> {
    if coords.is_empty() {
        return None;
    }
    let sum: DVec2 = coords.iter().copied().sum();
    Some(sum / coords.len() as f64)
}

/// Konvexe Hülle (Andrew's Monotone Chain), gegen den Uhrzeigersinn, ohne Schlusspunkt.
pub fn convex_hull(coords: &[DVec2]) -> Vec<DVec2> {
    let mut points: Vec<DVec2> = coords.to_vec();
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup();
    if points.len() < 3 {
        return points;
    }

    fn cross(o: DVec2, a: DVec2, b: DVec2) -> f64 {
        (a - o).perp_dot(b - o)
    }

    let mut lower: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in &points {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Flächengewichteter Schwerpunkt eines offenen Rings.
///
/// Gibt `None` zurück wenn die Fläche (nahezu) null ist.
pub fn polygon_centroid(ring: &[DVec2]) -> Option<DVec2> {
    if ring.len() < 3 {
        return None;
    }
    // Relativ zum ersten Punkt rechnen, hält große lng/lat-Werte numerisch stabil
    let origin = ring[0];
    let mut area2 = 0.0;
    let mut acc = DVec2::ZERO;
    for i in 0..ring.len() {
        let a = ring[i] - origin;
        let b = ring[(i + 1) % ring.len()] - origin;
        let cross = a.perp_dot(b);
        area2 += cross;
        acc += (a + b) * cross;
    }
    if area2.abs() < f64::EPSILON {
        return None;
    }
    Some(origin + acc / (3.0 * area2))
}

/// Massenschwerpunkt einer Koordinatenmenge.
///
/// Schwerpunkt der konvexen Hülle; bei degenerierter Hülle (kollinear,
/// weniger als drei Punkte) das arithmetische Mittel.
pub fn center_of_mass(coords: &[DVec2]) -> Option<DVec2> {
    let hull = convex_hull(coords);
    polygon_centroid(&hull).or_else(|| mean(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_along_equator_equals_degree_delta() {
        let d = distance_degrees(DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0));
        assert_relative_eq!(d, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let a = DVec2::new(13.4, 52.5);
        let b = DVec2::new(2.35, 48.85);
        assert_relative_eq!(distance_degrees(a, b), distance_degrees(b, a), epsilon = 1e-12);
        assert_relative_eq!(distance_degrees(a, a), 0.0);
    }

    #[test]
    fn test_farthest_point_on_unit_square() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        assert_eq!(farthest_point(DVec2::new(1.0, 1.0), &square), DVec2::new(0.0, 0.0));
        assert_eq!(farthest_point(DVec2::new(0.0, 1.0), &square), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_farthest_point_without_candidates_is_origin() {
        let p = DVec2::new(5.0, 5.0);
        assert_eq!(farthest_point(p, &[]), p);
        assert_eq!(farthest_point(p, &[p]), p);
    }

    #[test]
    fn test_center_of_mass_of_square() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(2.0, 0.0),
        ];
        let c = center_of_mass(&square).unwrap();
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_of_mass_ignores_interior_points() {
        // Innenpunkt verändert die Hülle nicht
        let coords = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(0.5, 0.5),
            DVec2::new(4.0, 4.0),
            DVec2::new(0.0, 4.0),
        ];
        let c = center_of_mass(&coords).unwrap();
        assert_relative_eq!(c.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_of_mass_collinear_falls_back_to_mean() {
        let line = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(5.0, 0.0)];
        let c = center_of_mass(&line).unwrap();
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 0.0);
        assert_eq!(center_of_mass(&[]), None);
    }
}
