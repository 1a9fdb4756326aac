// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{errors::ShamirError, gen_shares::generate_shares, shares::ShareSet};
use num_bigint::BigInt;
use polyshare_polynomial::Polynomial;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Convenience struct for holding threshold sharing parameters
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Number of shares to produce
    num_parties: usize,
    /// Shares needed to determine the polynomial
    threshold: usize,
    /// Prime defining the field, serialized as a decimal string
    #[serde(with = "decimal")]
    prime: BigInt,
}

mod decimal {
    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.trim().parse().map_err(de::Error::custom)
    }
}

impl SharingConfig {
    /// Constructor for the SharingConfig
    pub fn new(num_parties: usize, threshold: usize, prime: BigInt) -> Self {
        Self {
            num_parties,
            threshold,
            prime,
        }
    }

    pub fn num_parties(&self) -> usize {
        self.num_parties
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn prime(&self) -> &BigInt {
        &self.prime
    }

    /// Runs [`generate_shares`] with these parameters.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(ShareSet, Polynomial), ShamirError> {
        generate_shares(self.num_parties, self.threshold, &self.prime, rng)
    }
}
