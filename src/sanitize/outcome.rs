use crate::sanitize::{ParseError, StandardizationError};

/// Result of running one SMILES through parse, standardize and compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizeOutcome {
    Sanitized {
        canonical_smiles: String,
        changed: bool,
    },
    NoInput,
    ParseFailure(ParseError),
    StandardizationFailure(StandardizationError),
}

impl SanitizeOutcome {
    /// The `(sanitized smiles, was changed)` pair written to the output table. Every outcome
    /// other than `Sanitized` renders as `(None, false)`.
    pub fn to_columns(&self) -> (Option<String>, bool) {
        match self {
            SanitizeOutcome::Sanitized {
                canonical_smiles,
                changed,
            } => (Some(canonical_smiles.clone()), *changed),
            _ => (None, false),
        }
    }

    pub fn canonical_smiles(&self) -> Option<&str> {
        match self {
            SanitizeOutcome::Sanitized {
                canonical_smiles, ..
            } => Some(canonical_smiles),
            _ => None,
        }
    }

    pub fn changed(&self) -> bool {
        matches!(self, SanitizeOutcome::Sanitized { changed: true, .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SanitizeOutcome::ParseFailure(_) | SanitizeOutcome::StandardizationFailure(_)
        )
    }

    pub fn status(&self) -> &'static str {
        match self {
            SanitizeOutcome::Sanitized { .. } => "sanitized",
            SanitizeOutcome::NoInput => "no_input",
            SanitizeOutcome::ParseFailure(_) => "parse_failure",
            SanitizeOutcome::StandardizationFailure(_) => "standardization_failure",
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            SanitizeOutcome::ParseFailure(e) => Some(e.to_string()),
            SanitizeOutcome::StandardizationFailure(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// One row of the sanitized dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureRecord {
    pub raw_smiles: Option<String>,
    pub canonical_smiles: Option<String>,
    pub changed: bool,
}

impl StructureRecord {
    pub fn from_outcome(raw_smiles: Option<String>, outcome: &SanitizeOutcome) -> Self {
        let (canonical_smiles, changed) = match raw_smiles {
            Some(_) => outcome.to_columns(),
            None => (None, false),
        };

        Self {
            raw_smiles,
            canonical_smiles,
            changed,
        }
    }

    pub fn valid(&self) -> bool {
        self.canonical_smiles.is_some()
    }
}
