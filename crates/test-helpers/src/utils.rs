// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use polyshare_polynomial::Modulus;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::{Arc, Mutex};

/// 2^61 - 1
pub const PRIME_61: &str = "2305843009213693951";

/// 2^127 - 1
pub const PRIME_127: &str = "170141183460469231731687303715884105727";

/// 2^61 + 1 = 3 * 768614336404564651
pub const COMPOSITE_61: &str = "2305843009213693953";

pub type SharedRng = Arc<Mutex<ChaCha20Rng>>;

pub fn create_rng_from_u64(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub fn create_shared_rng_from_u64(seed: u64) -> SharedRng {
    Arc::new(Mutex::new(create_rng_from_u64(seed)))
}

pub fn bigint(value: &str) -> BigInt {
    value.parse().expect("test constant must be a valid integer")
}

pub fn prime_61() -> BigInt {
    bigint(PRIME_61)
}

pub fn prime_127() -> BigInt {
    bigint(PRIME_127)
}

pub fn modulus_61() -> Modulus {
    Modulus::new(prime_61()).expect("2^61 - 1 is positive")
}

pub fn small_modulus(value: i64) -> Modulus {
    Modulus::new(BigInt::from(value)).expect("test modulus must be positive")
}
