// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build information for the gateway binary.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"authz-gateway version: {}\n\
		 Platform:              {}-{}",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::ARCH,
		std::env::consts::OS,
	)
}
