//! Configuration model loaded from external sources.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
#[derive(Clone, Debug, Deserialize)]
/// Settings of the page host binary.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Base URL of the upstream customer API, without the `/api` suffix.
    pub api_url: String,
    /// Settings handed to the browser through the search page.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings of the client-side workflow.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix prepended to every API path, e.g. `https://crm.example.com`.
    /// Empty means same origin.
    pub api_base: String,
    pub locale: LocaleConfig,
    pub messages: Messages,
}

/// Date and currency presentation rules.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocaleConfig {
    /// `chrono` format string used for purchase dates.
    pub date_format: String,
    pub currency_symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub max_fraction_digits: u8,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            max_fraction_digits: 2,
        }
    }
}

/// User-facing texts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub searching: String,
    pub lookup_failed: String,
    pub no_results: String,
    pub export_failed: String,
    pub loyalty_failed: String,
    pub loyalty_empty: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            searching: "Buscando...".to_string(),
            lookup_failed: "Error al buscar cliente".to_string(),
            no_results: "No se encontraron resultados".to_string(),
            export_failed: "Error al exportar los datos".to_string(),
            loyalty_failed: "Error al descargar el reporte de fidelización".to_string(),
            loyalty_empty: "No se encontraron clientes que cumplan los criterios de fidelización"
                .to_string(),
        }
    }
}
