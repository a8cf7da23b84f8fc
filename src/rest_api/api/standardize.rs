use crate::rest_api::api::{StandardizeResponse, StandardizedSmiles};
use crate::{rest_api::models::Smiles, sanitize::standardize_smiles};
use poem_openapi::payload::Json;
use rayon::prelude::*;

pub async fn v1_standardize(smiles_vec: Json<Vec<Smiles>>) -> StandardizeResponse {
    let standardized_smiles = smiles_vec
        .0
        .into_par_iter()
        .map(|s| {
            let Some(smiles) = s.smiles else {
                return StandardizedSmiles {
                    smiles: None,
                    error: Some("no SMILES input".to_string()),
                };
            };

            match standardize_smiles(&smiles) {
                Ok(romol) => StandardizedSmiles {
                    smiles: Some(romol.as_smiles()),
                    error: None,
                },
                Err(e) => StandardizedSmiles {
                    smiles: Some(smiles),
                    error: Some(e.to_string()),
                },
            }
        })
        .collect::<Vec<_>>();

    StandardizeResponse::Ok(Json(standardized_smiles))
}
