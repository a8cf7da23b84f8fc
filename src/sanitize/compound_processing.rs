use rdkit::{
    detect_chemistry_problems, fragment_parent, CleanupParameters, ROMol, SmilesParserParams,
};

use crate::sanitize::{ParseError, SanitizeOutcome, StandardizationError};

/// Reads SMILES exactly as written. No sanitization runs, so a Kekulé ring stays Kekulé and
/// explicit hydrogens stay in the graph.
pub fn parse_raw_smiles(smiles: &str) -> Result<ROMol, ParseError> {
    let mut parser_params = SmilesParserParams::default();
    parser_params.set_sanitize(false);

    let mut romol = ROMol::from_smiles_with_params(smiles, &parser_params).map_err(|e| {
        ParseError::InvalidSyntax {
            smiles: smiles.to_string(),
            reason: e.to_string(),
        }
    })?;
    romol.update_property_cache(false);

    Ok(romol)
}

/// Reads SMILES with full sanitization. Valence and kekulization problems are reported here.
pub fn parse_smiles(smiles: &str) -> Result<ROMol, ParseError> {
    ROMol::from_smiles(smiles).map_err(|e| ParseError::InvalidStructure {
        smiles: smiles.to_string(),
        reason: e.to_string(),
    })
}

/// Cleanup applied to every parsed molecule: explicit hydrogen removal, metal disconnection,
/// functional group normalization and reionization, followed by parent fragment selection.
/// The input is left untouched.
pub fn standardize_mol(romol: &ROMol) -> Result<ROMol, StandardizationError> {
    let rwmol = romol.as_rw_mol(false, 1);
    let cleanup_params = CleanupParameters::default();
    let parent_rwmol = fragment_parent(&rwmol, &cleanup_params, false);
    let standardized = parent_rwmol.to_ro_mol();

    let problems = detect_chemistry_problems(&standardized);
    if !problems.is_empty() {
        return Err(StandardizationError::ChemistryProblems {
            problems: format!("{:?}", problems),
        });
    }

    let smiles = standardized.as_smiles();
    if let Err(e) = ROMol::from_smiles(&smiles) {
        return Err(StandardizationError::Unreadable {
            smiles,
            reason: e.to_string(),
        });
    }

    Ok(standardized)
}

pub fn standardize_smiles(smi: &str) -> eyre::Result<ROMol> {
    let romol = parse_smiles(smi)?;
    let standardized = standardize_mol(&romol)?;
    Ok(standardized)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDetection {
    pub raw_canonical: String,
    pub standardized_canonical: String,
    pub changed: bool,
}

/// Compares canonical forms rather than input text so notation differences alone never count
/// as a change.
pub fn detect_change(raw: &ROMol, standardized: &ROMol) -> ChangeDetection {
    let raw_canonical = raw.as_smiles();
    let standardized_canonical = standardized.as_smiles();
    let changed = raw_canonical != standardized_canonical;

    ChangeDetection {
        raw_canonical,
        standardized_canonical,
        changed,
    }
}

/// Only the first whitespace-separated token is read as SMILES. Anything after it is treated
/// as a molecule name and discarded.
pub fn sanitize_smiles(smiles: Option<&str>) -> SanitizeOutcome {
    let Some(smiles) = smiles.map(str::trim).filter(|s| !s.is_empty()) else {
        return SanitizeOutcome::NoInput;
    };

    let smiles = match smiles.split_once(char::is_whitespace) {
        Some((token, trailing)) => {
            log::debug!(
                "Ignoring trailing text '{}' after SMILES '{}'",
                trailing.trim(),
                token
            );
            token
        }
        None => smiles,
    };

    let raw = match parse_raw_smiles(smiles) {
        Ok(romol) => romol,
        Err(e) => return SanitizeOutcome::ParseFailure(e),
    };

    let romol = match parse_smiles(smiles) {
        Ok(romol) => romol,
        Err(e) => return SanitizeOutcome::ParseFailure(e),
    };

    let standardized = match standardize_mol(&romol) {
        Ok(romol) => romol,
        Err(e) => return SanitizeOutcome::StandardizationFailure(e),
    };

    let detection = detect_change(&raw, &standardized);
    SanitizeOutcome::Sanitized {
        canonical_smiles: detection.standardized_canonical,
        changed: detection.changed,
    }
}
