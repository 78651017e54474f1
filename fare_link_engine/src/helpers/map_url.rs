use thiserror::Error;

use crate::traits::Coordinate;

#[derive(Debug, Clone, Error)]
#[error("Coordinate out of range: latitude {latitude}, longitude {longitude}")]
pub struct MapUrlError {
    pub latitude: f64,
    pub longitude: f64,
}

// Query fragments are pre-encoded; they are constant and never pass through an encoder.
const STATIC_MAP_BASE: &str = "https://maps-api-ssl.google.com/maps/api/staticmap";
const MAP_STYLE: &str = "style=feature%3Alandscape%7Cvisibility%3Aoff&style=feature%3Apoi%7Cvisibility%3Aoff&\
                         style=feature%3Atransit%7Cvisibility%3Aoff&style=feature%3Aroad.highway%7Celement%3Ageometry%\
                         7Clightness%3A39&style=feature%3Aroad.local%7Celement%3Ageometry%7Cgamma%3A1.45&style=\
                         feature%3Aroad%7Celement%3Alabels%7Cgamma%3A1.22&style=feature%3Aadministrative%7Cvisibility%\
                         3Aoff&style=feature%3Aadministrative.locality%7Cvisibility%3Aon&style=feature%3Alandscape.\
                         natural%7Cvisibility%3Aon";
const MARKER_START_ICON: &str = "http%3A%2F%2Fd1a3f4spazzrp4.cloudfront.net%2Freceipt-new%2Fmarker-start%402x.png";
const MARKER_FINISH_ICON: &str = "http%3A%2F%2Fd1a3f4spazzrp4.cloudfront.net%2Freceipt-new%2Fmarker-finish%402x.png";
const PATH_COLOR: &str = "0x2dbae4ff";

/// Builds the receipt map image URL: start and finish markers, a straight path between them,
/// and the muted rendering style used on ride receipts. Pure; the only failure is a
/// non-finite or out-of-range coordinate.
pub fn map_image_url(start: &Coordinate, end: &Coordinate, api_key: &str) -> Result<String, MapUrlError> {
    validate(start)?;
    validate(end)?;
    let (slat, slon) = (start.latitude, start.longitude);
    let (elat, elon) = (end.latitude, end.longitude);
    Ok(format!(
        "{STATIC_MAP_BASE}?{MAP_STYLE}&scale=2\
         &markers=shadow%3Afalse%7Cscale%3A2%7Cicon%3A{MARKER_START_ICON}%7C{slat}%2C{slon}\
         &markers=shadow%3Afalse%7Cscale%3A2%7Cicon%3A{MARKER_FINISH_ICON}%7C{elat}%2C{elon}\
         &path=color%3A{PATH_COLOR}%7Cweight%3A4%7C{slat}%2C{slon}%7C{elat}%2C{elon}\
         &size=400x400&key={api_key}&zoom=12"
    ))
}

fn validate(c: &Coordinate) -> Result<(), MapUrlError> {
    let ok = c.latitude.is_finite() &&
        c.longitude.is_finite() &&
        (-90.0..=90.0).contains(&c.latitude) &&
        (-180.0..=180.0).contains(&c.longitude);
    if ok {
        Ok(())
    } else {
        Err(MapUrlError { latitude: c.latitude, longitude: c.longitude })
    }
}
