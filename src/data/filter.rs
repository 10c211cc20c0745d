use super::facet::{Facet, FacetSelection};
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Filter pass
// ---------------------------------------------------------------------------

/// Indices of records that survive every active facet, in dataset order.
///
/// Facets are applied one after another in [`Facet::ALL`] order, each
/// narrowing the previous survivors. Inactive facets are skipped.
pub fn filtered_indices(records: &[Record], selection: &FacetSelection) -> Vec<usize> {
    let mut survivors: Vec<usize> = (0..records.len()).collect();

    for facet in Facet::ALL {
        let Some(selected) = selection.get(&facet) else {
            continue;
        };
        if !facet.is_active(selected) {
            continue;
        }
        survivors.retain(|&i| facet.matches(&records[i], selected));
        log::debug!(
            "{} {:?}: {} remaining",
            facet.key(),
            selected,
            survivors.len()
        );
    }

    survivors
}

/// The matching records themselves, borrowed from `records`.
pub fn filter<'a>(records: &'a [Record], selection: &FacetSelection) -> Vec<&'a Record> {
    filtered_indices(records, selection)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Convenience over a whole [`Dataset`].
pub fn filter_dataset<'a>(dataset: &'a Dataset, selection: &FacetSelection) -> Vec<&'a Record> {
    filter(&dataset.records, selection)
}
