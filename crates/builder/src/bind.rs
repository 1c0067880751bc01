//! The binding routine shared by every construction entry point

use crate::Parameterized;
use fastformer_errors::BuilderError;
use fastformer_types::Dictionary;
use tracing::{debug, trace};

/// Validation mode used by dictionary and keyword-set binding when the caller
/// has no reason to choose otherwise
pub const DICTIONARY_STRICT_DEFAULT: bool = true;

/// Validation mode for parsed command-line namespaces, which routinely carry
/// options that belong to other builders or subcommands
pub const NAMESPACE_STRICT_DEFAULT: bool = false;

/// What a successful bind did with each key, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    pub applied: Vec<String>,
    pub ignored: Vec<String>,
}

impl BindReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.ignored.is_empty()
    }
}

/// Validate every key, then assign every accepted value
///
/// Nothing is written unless the whole dictionary binds: keys are checked
/// against the schema before any assignment, and assignments go to a staged
/// copy that replaces `builder` only at the end.
pub(crate) fn bind_dictionary<B: Parameterized>(
    builder: &mut B,
    dictionary: Dictionary,
    strict: bool,
) -> Result<BindReport, BuilderError> {
    let mut report = BindReport::default();
    let mut accepted = Vec::with_capacity(dictionary.len());

    for (name, value) in dictionary {
        if B::has_parameter(&name) {
            accepted.push((name, value));
        } else if strict {
            return Err(BuilderError::unknown_parameter(B::NAME, name));
        } else {
            trace!(builder = B::NAME, parameter = %name, "ignoring unknown parameter");
            report.ignored.push(name);
        }
    }

    let mut staged = builder.clone();
    for (name, value) in accepted {
        staged.set_parameter(&name, value)?;
        report.applied.push(name);
    }
    *builder = staged;

    debug!(
        builder = B::NAME,
        strict,
        applied = report.applied.len(),
        ignored = report.ignored.len(),
        "bound builder parameters"
    );
    Ok(report)
}
