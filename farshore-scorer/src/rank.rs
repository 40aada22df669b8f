//! Batch ranking of candidate countries.

use farshore_core::{CountryStore, PreferenceError, PreferenceWeights, ScoreResult};

use crate::score_country;

/// Score every resolvable candidate code and rank the results.
///
/// Codes absent from the store are skipped rather than failing the
/// batch. Results sort descending by the rounded display score; the
/// sort is stable, so ties keep the input's relative order.
///
/// # Errors
/// Returns [`PreferenceError::InvalidWeights`] when the preference
/// weights cannot be resolved (non-finite, negative, or summing to
/// zero).
pub fn rank_countries<S>(
    store: &dyn CountryStore,
    codes: &[S],
    preferences: &PreferenceWeights,
) -> Result<Vec<ScoreResult>, PreferenceError>
where
    S: AsRef<str>,
{
    let weights = preferences.normalise()?;

    let mut results: Vec<ScoreResult> = codes
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|code| match store.country(code) {
            Some(country) => Some(score_country(&country, &weights)),
            None => {
                log::debug!("skipping unknown country code {code}");
                None
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(results)
}
