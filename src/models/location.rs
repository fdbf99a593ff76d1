use serde::Deserialize;
use crate::error::ApiError;

/// Ubicación geográfica de una IP
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub ip: String,
    pub longitude: f64,
    pub latitude: f64,
    pub city: String,
}

/// Respuesta del servicio de geolocalización por IP.
/// Acepta tanto los nombres cortos (`ip`, `city`) como los de freeipapi (`ipAddress`, `cityName`).
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeoLookupResponse {
    #[serde(default, alias = "ipAddress")]
    pub ip: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default, alias = "cityName")]
    pub city: Option<String>,
    #[serde(default)]
    pub error: Option<bool>,
}

impl Location {
    /// Valida la respuesta del lookup. Con `ip` pedida se conserva tal cual
    /// (el servicio puede normalizarla); sin ella se usa la que devuelve el servicio.
    pub fn from_lookup(ip: Option<&str>, response: GeoLookupResponse) -> Result<Self, ApiError> {
        let ip = match (ip, response.ip) {
            (Some(requested), _) => requested.to_string(),
            (None, Some(found)) if !found.is_empty() => found,
            _ => return Err(ApiError::MissingField { ip: String::new(), field: "ip" }),
        };

        if response.error == Some(true) {
            return Err(ApiError::Lookup { ip });
        }

        let (longitude, latitude) = match (response.longitude, response.latitude) {
            (Some(lon), Some(lat)) if lon != 0.0 && lat != 0.0 => (lon, lat),
            _ => return Err(ApiError::MissingCoordinates { ip }),
        };

        let city = response
            .city
            .ok_or_else(|| ApiError::MissingField { ip: ip.clone(), field: "city" })?;

        Ok(Self { ip, longitude, latitude, city })
    }

    /// "Ciudad (lon, lat)"
    pub fn label(&self) -> String {
        format!("{} ({:.4}, {:.4})", self.city, self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(body: &str) -> GeoLookupResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn accepts_freeipapi_field_names() {
        let response = lookup(r#"{"ipAddress":"8.8.8.8","longitude":-122.08,"latitude":37.38,"cityName":"Mountain View"}"#);
        let location = Location::from_lookup(None, response).unwrap();
        assert_eq!(location.ip, "8.8.8.8");
        assert_eq!(location.city, "Mountain View");
        assert_eq!(location.label(), "Mountain View (-122.0800, 37.3800)");
    }

    #[test]
    fn falls_back_to_requested_ip() {
        let response = lookup(r#"{"longitude":2.35,"latitude":48.85,"city":"Paris"}"#);
        let location = Location::from_lookup(Some("1.2.3.4"), response).unwrap();
        assert_eq!(location.ip, "1.2.3.4");
    }

    #[test]
    fn requested_ip_wins_over_normalised_reply() {
        let response = lookup(r#"{"ipAddress":"2001:4860:4860::8888","longitude":-122.08,"latitude":37.38,"cityName":"Mountain View"}"#);
        let location = Location::from_lookup(Some("2001:4860:4860:0:0:0:0:8888"), response).unwrap();
        assert_eq!(location.ip, "2001:4860:4860:0:0:0:0:8888");
    }

    #[test]
    fn error_flag_is_a_rejected_lookup() {
        let response = lookup(r#"{"ip":"10.0.0.1","error":true}"#);
        assert_eq!(
            Location::from_lookup(Some("10.0.0.1"), response),
            Err(ApiError::Lookup { ip: "10.0.0.1".to_string() })
        );
    }

    #[test]
    fn zero_or_missing_coordinates_are_rejected() {
        let zero = lookup(r#"{"ip":"1.1.1.1","longitude":0,"latitude":12.0,"city":"X"}"#);
        assert!(matches!(Location::from_lookup(None, zero), Err(ApiError::MissingCoordinates { .. })));

        let missing = lookup(r#"{"ip":"1.1.1.1","city":"X"}"#);
        assert!(matches!(Location::from_lookup(None, missing), Err(ApiError::MissingCoordinates { .. })));
    }

    #[test]
    fn missing_city_is_reported() {
        let response = lookup(r#"{"ip":"1.1.1.1","longitude":1.0,"latitude":1.0}"#);
        assert_eq!(
            Location::from_lookup(None, response),
            Err(ApiError::MissingField { ip: "1.1.1.1".to_string(), field: "city" })
        );
    }
}
