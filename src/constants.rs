/// Mean Earth radius in kilometres, used by the planar projection
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default minimum time separation between two flights at a shared point,
/// in minutes
pub const DEFAULT_SAFETY_MARGIN: f64 = 15.0;
