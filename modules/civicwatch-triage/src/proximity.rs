//! Geographic proximity gate for duplicate detection.

use civicwatch_common::{haversine_km, GeoPoint};

/// Maximum distance at which two reports are treated as the same problem.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 1.0;

/// True when `a` and `b` lie within `max_km` of each other along the great
/// circle. The boundary is inclusive. Callers skip the check entirely when
/// either report lacks coordinates.
pub fn within_distance(a: GeoPoint, b: GeoPoint, max_km: f64) -> bool {
    haversine_km(a, b) <= max_km
}
