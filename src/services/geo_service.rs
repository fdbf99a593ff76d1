// ============================================================================
// GEO SERVICE - Geolocalización de IPs (servicio externo)
// ============================================================================

use std::net::IpAddr;
use gloo_net::http::Request;
use crate::config::{join_url, CONFIG};
use crate::error::ApiError;
use crate::models::{GeoLookupResponse, Location};
use super::api_client::check_status;

#[derive(Clone, Debug, PartialEq)]
pub struct GeoService {
    base_url: String,
}

impl GeoService {
    pub fn new() -> Self {
        Self { base_url: CONFIG.geo_api_url.clone() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Sin IP => el servicio responde con la IP pública del llamante
    pub fn lookup_url(&self, ip: Option<&str>) -> String {
        match ip {
            Some(ip) => join_url(&self.base_url, ip),
            None => self.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ubicación propia (IP pública del navegador)
    pub async fn my_location(&self) -> Result<Location, ApiError> {
        let response = self.lookup(None).await?;
        Location::from_lookup(None, response)
    }

    /// Ubicación de una IP concreta
    pub async fn target_location(&self, ip: &str) -> Result<Location, ApiError> {
        ensure_public(ip)?;
        let response = self.lookup(Some(ip)).await?;
        Location::from_lookup(Some(ip), response)
    }

    /// Geolocaliza una lista de IPs, en orden, saltando las que no se pueden ubicar
    pub async fn locate_all<S: AsRef<str>>(&self, ips: &[S]) -> Vec<Location> {
        let mut locations = Vec::with_capacity(ips.len());
        for ip in ips {
            let ip = ip.as_ref();
            match self.target_location(ip).await {
                Ok(location) => locations.push(location),
                Err(e) if e.is_skippable() => {
                    log::debug!("⏭️ {} omitida: {}", ip, e);
                }
                Err(e) => {
                    log::warn!("⚠️ Error geolocalizando {}: {}", ip, e);
                }
            }
        }
        log::info!("📍 Ubicaciones obtenidas: {}/{}", locations.len(), ips.len());
        locations
    }

    async fn lookup(&self, ip: Option<&str>) -> Result<GeoLookupResponse, ApiError> {
        let url = self.lookup_url(ip);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(ApiError::network)?;

        check_status(response.status(), &response.status_text())?;

        response
            .json::<GeoLookupResponse>()
            .await
            .map_err(ApiError::parse)
    }
}

impl Default for GeoService {
    fn default() -> Self {
        Self::new()
    }
}

/// Las direcciones privadas no se envían al servicio
pub fn ensure_public(ip: &str) -> Result<(), ApiError> {
    let addr: IpAddr = ip
        .trim()
        .parse()
        .map_err(|_| ApiError::parse(format!("'{}' is not an IP address", ip)))?;
    if is_public(&addr) {
        Ok(())
    } else {
        Err(ApiError::PrivateAddress { ip: ip.to_string() })
    }
}

pub fn is_public(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => {
            !(v4.is_private()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast()
                || v4.is_documentation())
        }
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            // fc00::/7 (ULA) y fe80::/10 (link-local)
            !(v6.is_loopback()
                || v6.is_unspecified()
                || (first & 0xfe00) == 0xfc00
                || (first & 0xffc0) == 0xfe80)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_appends_ip() {
        let service = GeoService::with_base_url("https://geo.example/api/json/");
        assert_eq!(service.lookup_url(Some("8.8.8.8")), "https://geo.example/api/json/8.8.8.8");
        assert_eq!(service.lookup_url(None), "https://geo.example/api/json");
    }

    #[test]
    fn private_addresses_are_not_public() {
        for ip in ["10.0.0.1", "192.168.1.9", "172.16.4.4", "127.0.0.1", "0.0.0.0", "169.254.1.1", "::1", "fd00::1", "fe80::1"] {
            let addr: IpAddr = ip.parse().unwrap();
            assert!(!is_public(&addr), "{} should be private", ip);
        }
        for ip in ["8.8.8.8", "1.1.1.1", "2001:4860:4860::8888"] {
            let addr: IpAddr = ip.parse().unwrap();
            assert!(is_public(&addr), "{} should be public", ip);
        }
    }

    #[test]
    fn ensure_public_classifies_input() {
        assert!(ensure_public("8.8.8.8").is_ok());
        assert_eq!(
            ensure_public("192.168.0.10"),
            Err(ApiError::PrivateAddress { ip: "192.168.0.10".to_string() })
        );
        assert!(matches!(ensure_public("not-an-ip"), Err(ApiError::Parse(_))));
    }
}
