use std::path::Path;

use crate::constants::FASTA_TOKEN;
use crate::constants::LABEL_TOKEN;
use crate::constants::RAW_TOKEN;

/// Render an analysis configuration from its template text.
///
/// Every occurrence of the three placeholder tokens is replaced: the raw
/// token by the in-run reference to the raw file, the fasta token by the
/// reference-data path, and the label token by the derived label. All
/// other content passes through unchanged.
pub fn render_mqpar(template: &str, raw: &Path, fasta: &Path, label: &str) -> String {
    template
        .replace(RAW_TOKEN, &raw.display().to_string())
        .replace(FASTA_TOKEN, &fasta.display().to_string())
        .replace(LABEL_TOKEN, label)
}

#[cfg(test)]
#[path = "tests/template.rs"]
mod tests;
