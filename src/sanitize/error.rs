use thiserror::Error;

/// Reasons a SMILES string could not be turned into a molecule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no SMILES input")]
    EmptyInput,

    #[error("could not parse SMILES '{smiles}': {reason}")]
    InvalidSyntax { smiles: String, reason: String },

    #[error("SMILES '{smiles}' does not describe a valid structure: {reason}")]
    InvalidStructure { smiles: String, reason: String },
}

/// Reasons a parsed molecule could not be brought into a consistent standard form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandardizationError {
    #[error("chemistry problems remain after cleanup: {problems}")]
    ChemistryProblems { problems: String },

    #[error("standardized SMILES '{smiles}' could not be read back: {reason}")]
    Unreadable { smiles: String, reason: String },
}
