use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Una ruta devuelta por `GET /routes`; se muestra como una línea en negrita
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RouteItem {
    #[serde(default, deserialize_with = "deserialize_item_text")]
    pub item: String,
}

impl RouteItem {
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }

    /// Texto del item como IP, si lo es (p.ej. un salto de traceroute)
    pub fn as_ip(&self) -> Option<std::net::IpAddr> {
        self.item.trim().parse().ok()
    }
}

/// Sobre de la respuesta: `{ "data": [ { "item": ... }, ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RoutesResponse {
    pub data: Vec<RouteItem>,
}

/// El backend no fija el tipo de `item`: números y booleanos se muestran como texto
fn deserialize_item_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
