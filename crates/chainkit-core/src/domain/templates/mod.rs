//! Template bodies for generated Solidity sources and tooling configs.
//!
//! Bodies are `{{VARIABLE}}`-parameterised literals; every public function
//! is a deterministic function of its arguments.

pub mod configs;
pub mod contracts;

pub(crate) const SOLIDITY_VERSION: &str = "SOLIDITY_VERSION";
pub(crate) const CONTRACT_WRITE_DIR: &str = "CONTRACT_WRITE_DIR";

/// Replace every `{{KEY}}` in `source` with its value.
pub(crate) fn render(source: &str, variables: &[(&str, &str)]) -> String {
    let mut out = source.trim().to_string();
    for (key, value) in variables {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}
