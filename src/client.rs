use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Tariff group of the consumer unit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize, derive_more::Display)]
pub enum TariffGroup {
    /// High and medium voltage.
    #[value(name = "A", alias = "a")]
    A,

    /// Low voltage.
    #[value(name = "B", alias = "b")]
    B,
}

/// Client to whom the audit report is addressed.
///
/// The audit itself never looks at it.
#[derive(Clone, Parser, Serialize)]
pub struct ClientProfile {
    #[clap(long = "client-name", default_value = "Condomínio Exemplo", env = "CLIENT_NAME")]
    pub name: String,

    #[clap(long, value_enum, default_value = "A", env = "TARIFF_GROUP")]
    pub tariff_group: TariffGroup,

    /// Electric utility company.
    #[clap(long = "utility-company", default_value = "CEPISA", env = "UTILITY_COMPANY")]
    pub utility: String,

    #[clap(long = "client-state", default_value = "PI", env = "CLIENT_STATE")]
    pub state: String,

    #[clap(long = "building-manager", env = "BUILDING_MANAGER")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_manager: Option<String>,

    #[clap(long, env = "ENGINEER")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineer: Option<String>,
}
