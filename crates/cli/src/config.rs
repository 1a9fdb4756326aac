// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use num_bigint::BigInt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, fs, path::Path};

/// Prefix for environment overrides, e.g. `POLYSHARE_THRESHOLD=4`.
pub const ENV_PREFIX: &str = "POLYSHARE_";

/// A field prime. Accepted as an integer or a decimal string so that primes beyond
/// the native integer range can be written in YAML and environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prime(pub BigInt);

impl Serialize for Prime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Prime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PrimeVisitor)
    }
}

struct PrimeVisitor;

impl<'de> de::Visitor<'de> for PrimeVisitor {
    type Value = Prime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Prime, E> {
        Ok(Prime(BigInt::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Prime, E> {
        Ok(Prime(BigInt::from(v)))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Prime, E> {
        Ok(Prime(BigInt::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Prime, E> {
        Ok(Prime(BigInt::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Prime, E> {
        v.trim().parse::<BigInt>().map(Prime).map_err(E::custom)
    }
}

/// Defaults for the `shares` command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Prime defining the field
    pub prime: Prime,
    /// Number of shares to generate
    pub parties: usize,
    /// Number of shares needed to determine the polynomial
    pub threshold: usize,
    /// Seed for a reproducible run. Entropy from the OS is used when absent.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // 2^61 - 1
            prime: Prime((BigInt::from(1) << 61u32) - 1),
            parties: 5,
            threshold: 3,
            seed: None,
        }
    }
}

/// Values given on the command line. Unset fields leave the configured value alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prime: Option<Prime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parties: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Layers defaults, the optional YAML config file, `POLYSHARE_*` environment variables
/// and command line overrides, later layers winning.
pub fn load_config(config_file: Option<&Path>, overrides: &CliOverrides) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_file {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Configuration file not found: {}", path.display()))?;
        figment = figment.merge(Yaml::string(&yaml));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")
}
