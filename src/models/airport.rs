use crate::constants::EARTH_RADIUS_KM;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An airport with its code, location name, and geographic position in
/// signed decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            code: code.into(),
            location: location.into(),
            latitude,
            longitude,
        }
    }

    /// Build an airport from degree/minute/second coordinates with
    /// hemisphere letters (N/S for latitude, E/W for longitude).
    ///
    /// # Errors
    ///
    /// Returns an error if a hemisphere letter is not one of N, S, E, W or
    /// does not match its axis.
    #[allow(clippy::too_many_arguments)]
    pub fn from_dms(
        code: impl Into<String>,
        location: impl Into<String>,
        lat_deg: u32,
        lat_min: u32,
        lat_sec: u32,
        lat_hemisphere: char,
        lon_deg: u32,
        lon_min: u32,
        lon_sec: u32,
        lon_hemisphere: char,
    ) -> Result<Self, String> {
        let latitude = dms_to_degrees(lat_deg, lat_min, lat_sec, lat_hemisphere, "NS")?;
        let longitude = dms_to_degrees(lon_deg, lon_min, lon_sec, lon_hemisphere, "EW")?;
        Ok(Self::new(code, location, latitude, longitude))
    }

    /// Project the geographic position onto the planar coordinate system
    /// used by the straight-line geometry.
    ///
    /// Uses `x = R·cos(lat)·sin(lon)`, `y = R·cos(lat)·cos(lon)` with the
    /// mean Earth radius. Consistent within the tool, not metrically
    /// accurate at scale. Out-of-range degrees produce NaN coordinates,
    /// which are propagated rather than trapped.
    #[must_use]
    pub fn position(&self) -> Point {
        let lat_rad = self.latitude.to_radians();
        let lon_rad = self.longitude.to_radians();
        Point::new(
            EARTH_RADIUS_KM * lat_rad.cos() * lon_rad.sin(),
            EARTH_RADIUS_KM * lat_rad.cos() * lon_rad.cos(),
        )
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.location, self.code)
    }
}

fn dms_to_degrees(
    degrees: u32,
    minutes: u32,
    seconds: u32,
    hemisphere: char,
    axis: &str,
) -> Result<f64, String> {
    let sign = match hemisphere {
        'N' | 'E' if axis.contains(hemisphere) => 1.0,
        'S' | 'W' if axis.contains(hemisphere) => -1.0,
        _ => {
            return Err(format!(
                "invalid hemisphere letter '{hemisphere}' (expected one of {axis})"
            ))
        }
    };
    Ok(sign * (f64::from(degrees) + f64::from(minutes) / 60.0 + f64::from(seconds) / 3600.0))
}
