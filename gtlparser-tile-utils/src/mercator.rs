use std::f64::consts::PI;

/// Radius of the WGS84 ellipsoid's semi-major axis, in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Circumference of the Web Mercator world, in meters.
pub const EARTH_CIRCUMFERENCE: f64 = 2.0 * PI * EARTH_RADIUS;

/// Largest latitude representable in Web Mercator.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Convert Web Mercator (EPSG:3857) meters into WGS84 longitude/latitude degrees.
#[must_use]
pub fn webmercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lng = (x / EARTH_RADIUS).to_degrees();
    let lat = f64::atan(f64::sinh(y / EARTH_RADIUS)).to_degrees();
    (lng, lat)
}

/// Convert WGS84 longitude/latitude degrees into Web Mercator (EPSG:3857) meters.
///
/// Latitudes are clamped to the Web Mercator range.
#[must_use]
pub fn wgs84_to_webmercator(lng: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = lng.to_radians() * EARTH_RADIUS;
    let y = f64::ln(f64::tan(PI / 4.0 + lat.to_radians() / 2.0)) * EARTH_RADIUS;
    (x, y)
}
