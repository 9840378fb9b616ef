use crate::geo::{distance, Point};
use crate::locations::NamedLocation;

/// Locations whose distance from `center` is at most `radius_meters`, in input order.
pub fn within_radius(
    locations: &[NamedLocation],
    center: Point,
    radius_meters: f64,
) -> Vec<NamedLocation> {
    let mut found = Vec::new();
    for location in locations {
        let d = distance(center, location.point);
        log::debug!("{}: {:.3} m from center", location.name, d);
        // NaN radius or distance never passes.
        if d <= radius_meters {
            found.push(location.clone());
        }
    }
    found
}
