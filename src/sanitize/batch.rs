use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::sanitize::{sanitize_smiles, SanitizeOutcome, StructureRecord};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub parallel: bool,
    pub chunk_size: usize,
    /// Checked between records when sequential and between chunks when parallel.
    pub deadline: Option<Instant>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
            deadline: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub sanitized: usize,
    pub no_input: usize,
    pub parse_failures: usize,
    pub standardization_failures: usize,
    /// Sanitized records whose canonical form changed. Failures are never counted here.
    pub changed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[SanitizeOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome {
                SanitizeOutcome::Sanitized { changed, .. } => {
                    summary.sanitized += 1;
                    if *changed {
                        summary.changed += 1;
                    }
                }
                SanitizeOutcome::NoInput => summary.no_input += 1,
                SanitizeOutcome::ParseFailure(_) => summary.parse_failures += 1,
                SanitizeOutcome::StandardizationFailure(_) => {
                    summary.standardization_failures += 1
                }
            }
        }
        summary
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One outcome per processed input, in input order.
    pub outcomes: Vec<SanitizeOutcome>,
    pub summary: BatchSummary,
    /// The deadline passed before every input was processed.
    pub interrupted: bool,
}

impl BatchReport {
    pub fn records<S: AsRef<str>>(&self, smiles: &[Option<S>]) -> Vec<StructureRecord> {
        smiles
            .iter()
            .zip(&self.outcomes)
            .map(|(raw, outcome)| {
                let raw = raw.as_ref().map(|s| s.as_ref().to_string());
                StructureRecord::from_outcome(raw, outcome)
            })
            .collect()
    }
}

fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

/// Sanitizes every input in order. A failing record only affects its own outcome.
pub fn sanitize_batch<S>(smiles: &[Option<S>], options: &BatchOptions) -> BatchReport
where
    S: AsRef<str> + Sync,
{
    let chunk_size = options.chunk_size.max(1);
    let mut outcomes = Vec::with_capacity(smiles.len());
    let mut interrupted = false;

    for chunk in smiles.chunks(chunk_size) {
        let offset = outcomes.len();

        if options.parallel {
            if deadline_passed(options.deadline) {
                interrupted = true;
                break;
            }
            let chunk_outcomes = chunk
                .par_iter()
                .map(|raw| sanitize_smiles(raw.as_ref().map(|s| s.as_ref())))
                .collect::<Vec<_>>();
            outcomes.extend(chunk_outcomes);
        } else {
            for raw in chunk {
                if deadline_passed(options.deadline) {
                    interrupted = true;
                    break;
                }
                outcomes.push(sanitize_smiles(raw.as_ref().map(|s| s.as_ref())));
            }
        }

        for (idx, outcome) in outcomes.iter().enumerate().skip(offset) {
            if let Some(error) = outcome.error_message() {
                log::debug!("Failed to sanitize record {}: {}", idx, error);
            }
        }
        log::info!("Sanitized {} of {} records", outcomes.len(), smiles.len());

        if interrupted {
            break;
        }
    }

    if interrupted {
        log::warn!(
            "Deadline reached after {} of {} records",
            outcomes.len(),
            smiles.len()
        );
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    log::info!(
        "Sanitized: {}, no input: {}, parse failures: {}, standardization failures: {}",
        summary.sanitized,
        summary.no_input,
        summary.parse_failures,
        summary.standardization_failures
    );
    log::info!("Total SMILES changed: {}", summary.changed);

    BatchReport {
        outcomes,
        summary,
        interrupted,
    }
}
