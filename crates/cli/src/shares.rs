// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use polyshare_polynomial::Modulus;
use polyshare_shamir::SharingConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt::Write;
use tracing::info;

pub fn execute(config: &AppConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    print!("{}", generate(config, &mut rng)?);
    Ok(())
}

pub fn generate<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Result<String> {
    let sharing = SharingConfig::new(config.parties, config.threshold, config.prime.0.clone());
    let (shares, poly) = sharing.generate(rng).with_context(|| {
        format!(
            "Could not generate {} shares with threshold {}",
            config.parties, config.threshold
        )
    })?;

    let modulus = Modulus::new(config.prime.0.clone())?;
    info!(verified = shares.verify(&poly, &modulus), "shares generated");

    let mut out = String::new();
    writeln!(out, "polynomial: {poly}")?;
    for share in &shares {
        writeln!(out, "{share}")?;
    }
    Ok(out)
}
