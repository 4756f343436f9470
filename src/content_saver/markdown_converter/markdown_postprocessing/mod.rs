//! Markdown cleanup applied after htmd conversion.

mod legacy_cleanup;
mod normalizer;

#[cfg(test)]
mod tests;

pub use legacy_cleanup::legacy_cleanup;
pub use normalizer::{NORMALIZER_STEPS, Replacement, Substitution, normalize_markdown, step_names};
