use crate::rest_api::api::{SanitizeResponse, SanitizedSmiles};
use crate::{rest_api::models::Smiles, sanitize::sanitize_smiles};
use poem_openapi::payload::Json;
use rayon::prelude::*;

pub async fn v1_sanitize(smiles_vec: Json<Vec<Smiles>>) -> SanitizeResponse {
    let sanitized_smiles = smiles_vec
        .0
        .into_par_iter()
        .map(|s| {
            let outcome = sanitize_smiles(s.smiles.as_deref());

            SanitizedSmiles {
                canonical_smiles: outcome.canonical_smiles().map(str::to_string),
                changed: outcome.changed(),
                status: outcome.status().to_string(),
                error: outcome.error_message(),
                smiles: s.smiles,
            }
        })
        .collect::<Vec<_>>();

    SanitizeResponse::Ok(Json(sanitized_smiles))
}
