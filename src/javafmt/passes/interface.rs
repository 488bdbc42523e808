//! Pass interface for token stream rewrites
//!
//! This module defines the core `Pass` trait that all formatting passes
//! implement. A pass is a pure rewrite: it takes the token list by value and
//! returns the (possibly longer or shorter) transformed list.
//!
//! Design principles:
//! - Passes are deterministic: same tokens and settings, same output
//! - Passes operate on the flat token list; order in the list is the only
//!   structure they may rely on
//! - Passes have metadata: name and description for the CLI listing
//! - Passes are composable: the pipeline chains them in a fixed order

use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::Token;

/// A single rewrite stage of the formatting pipeline.
pub trait Pass {
    /// Returns the name of this pass
    ///
    /// Names are lowercase with underscores (e.g., "space_after_comma") and
    /// match the settings toggle that controls the pass.
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this pass does
    fn description(&self) -> &str;

    /// Whether the pass runs under the given settings. A disabled pass is
    /// skipped entirely; its input reaches the next pass unchanged.
    fn enabled(&self, settings: &Settings) -> bool;

    /// Apply this pass to a token list.
    ///
    /// Structural anomalies are appended to `diagnostics` as human-readable
    /// strings; they never abort the rewrite.
    fn apply(
        &self,
        tokens: Vec<Token>,
        settings: &Settings,
        diagnostics: &mut Vec<String>,
    ) -> Vec<Token>;
}
