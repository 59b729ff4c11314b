// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit a custom cfg flag based on THRESHOLD feature selection.
//!
//! Tests can then use `#[cfg(threshold_eq_99)]` instead of
//! `#[cfg(not(any(feature = "threshold_50", feature = "threshold_90")))]`.

fn main() {
    println!("cargo:rustc-check-cfg=cfg(threshold_eq_99)");

    // THRESHOLD = 0.99 (default or explicit threshold_99 feature)
    #[cfg(any(
        feature = "threshold_99",
        not(any(feature = "threshold_50", feature = "threshold_90"))
    ))]
    println!("cargo:rustc-cfg=threshold_eq_99");
}
