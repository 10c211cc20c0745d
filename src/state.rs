use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::config;
use crate::data::facet::{option_match_count, Facet, FacetSelection};
use crate::data::filter::filtered_indices;
use crate::data::loader;
use crate::data::model::{columns, Dataset, Record};

/// How the central panel lays out the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Cards,
    Table,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalogue (None until a load completes).
    pub dataset: Option<Dataset>,

    /// File the current dataset came from. Only updated by a successful load.
    pub source: Option<PathBuf>,

    /// Checked options per facet.
    pub selection: FacetSelection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Records each configured option matches on its own, in
    /// [`config::facet_options`] order (cached per load).
    pub option_counts: BTreeMap<Facet, Vec<usize>>,

    /// Job category colours for the cards view.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pub view: ResultView,

    /// Path being loaded and the channel its result arrives on.
    pending: Option<(PathBuf, Receiver<Result<Dataset>>)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            selection: FacetSelection::new(),
            visible_indices: Vec::new(),
            option_counts: BTreeMap::new(),
            color_map: None,
            status_message: None,
            loading: false,
            view: ResultView::default(),
            pending: None,
        }
    }
}

impl AppState {
    // ---- Loading ----

    /// Read and parse `path` on a background thread. The result is picked
    /// up by [`AppState::poll_load`].
    pub fn begin_load(&mut self, path: PathBuf) {
        let (tx, rx) = mpsc::channel();
        let requested = path.clone();
        thread::spawn(move || {
            let result = loader::load_file(&path)
                .with_context(|| format!("loading {}", path.display()));
            // Receiver gone means the app is shutting down.
            let _ = tx.send(result);
        });

        self.pending = Some((requested, rx));
        self.loading = true;
        self.status_message = None;
    }

    /// Install a finished background load, if any. Returns true when the
    /// state changed.
    pub fn poll_load(&mut self) -> bool {
        let Some((_, rx)) = &self.pending else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(anyhow::anyhow!("loader thread exited")),
        };
        let Some((path, _)) = self.pending.take() else {
            return false;
        };

        match outcome {
            Ok(dataset) => {
                self.source = Some(path);
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
        true
    }

    /// Ingest a newly loaded dataset and run the first filter pass.
    ///
    /// The current selection is kept and re-applied.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.option_counts = Facet::ALL
            .into_iter()
            .map(|facet| {
                let counts = config::facet_options(facet)
                    .iter()
                    .map(|&(value, _)| option_match_count(&dataset, facet, value))
                    .collect();
                (facet, counts)
            })
            .collect();
        self.color_map = Some(ColorMap::new(&dataset.unique_values(columns::JOB_CATEGORY)));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    // ---- Filtering ----

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(&ds.records, &self.selection);
            log::debug!("{}", config::count_label(self.visible_indices.len()));
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selection
            .get(&facet)
            .is_some_and(|s| s.contains(value))
    }

    /// Check or uncheck one option and refilter.
    pub fn set_option(&mut self, facet: Facet, value: &str, checked: bool) {
        let selected = self.selection.entry(facet).or_default();
        if checked {
            selected.insert(value.to_string());
        } else {
            selected.remove(value);
        }
        self.refilter();
    }

    /// Cached match count of the `index`-th configured option of `facet`.
    pub fn option_count(&self, facet: Facet, index: usize) -> usize {
        self.option_counts
            .get(&facet)
            .and_then(|counts| counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Number of checked options for a facet.
    pub fn selected_count(&self, facet: Facet) -> usize {
        self.selection.get(&facet).map_or(0, |s| s.len())
    }

    /// Uncheck everything in one facet.
    pub fn clear_facet(&mut self, facet: Facet) {
        self.selection.remove(&facet);
        self.refilter();
    }

    /// Uncheck every facet.
    pub fn reset_all(&mut self) {
        self.selection.clear();
        self.refilter();
    }

    // ---- Results ----

    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        let records = self.dataset.as_ref().map(|ds| ds.records.as_slice()).unwrap_or(&[]);
        self.visible_indices.iter().filter_map(move |&i| records.get(i))
    }

    pub fn count_label(&self) -> String {
        config::count_label(self.visible_indices.len())
    }

    /// Write the currently visible records to `path` as CSV.
    pub fn export_visible(&self, path: &Path) -> Result<()> {
        let ds = self.dataset.as_ref().context("no dataset loaded")?;
        loader::export_csv(path, ds, &self.visible_indices)
            .with_context(|| format!("exporting to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::data::parser::parse;

    const CSV: &str = "\
Brand,Model,JobCategory,CPU,RAM
Dell,XPS 13,Programming,Intel Core i7,16GB
Acer,Swift,Office,Intel Core i5,8GB
HP,Omen,Gaming,AMD Ryzen 7,32GB
";

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(parse(CSV));
        state
    }

    #[test]
    fn first_pass_shows_everything() {
        let state = loaded();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.count_label(), "3 laptop(s) found");
    }

    #[test]
    fn option_counts_cover_configured_options() {
        let state = loaded();
        let count = |facet: Facet, value: &str| {
            let index = config::facet_options(facet)
                .iter()
                .position(|&(v, _)| v == value)
                .unwrap();
            state.option_count(facet, index)
        };
        assert_eq!(count(Facet::Ram, "8"), 3);
        assert_eq!(count(Facet::Ram, "16"), 2);
        assert_eq!(count(Facet::Cpu, "Ryzen 7"), 1);
        assert_eq!(count(Facet::Price, "0"), 3);
        for facet in Facet::ALL {
            assert_eq!(state.option_counts[&facet].len(), config::facet_options(facet).len());
        }
        assert_eq!(state.option_count(Facet::Ram, 99), 0);
    }

    #[test]
    fn toggling_options_refilters() {
        let mut state = loaded();
        state.set_option(Facet::Ram, "16", true);
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert!(state.is_selected(Facet::Ram, "16"));

        state.set_option(Facet::Cpu, "ryzen", true);
        assert_eq!(state.visible_indices, vec![2]);

        state.set_option(Facet::Ram, "16", false);
        assert_eq!(state.visible_indices, vec![2]);
        assert_eq!(state.selected_count(Facet::Ram), 0);
    }

    #[test]
    fn reset_clears_every_facet() {
        let mut state = loaded();
        state.set_option(Facet::Cpu, "i5", true);
        state.set_option(Facet::Usage, "Office", true);
        assert_eq!(state.visible_indices, vec![1]);

        state.reset_all();
        assert!(state.selection.is_empty());
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn clear_facet_only_touches_one() {
        let mut state = loaded();
        state.set_option(Facet::Cpu, "intel", true);
        state.set_option(Facet::Ram, "16", true);
        state.clear_facet(Facet::Ram);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn selection_survives_reload() {
        let mut state = loaded();
        state.set_option(Facet::Cpu, "i7", true);
        state.set_dataset(parse(CSV));
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn no_dataset_means_nothing_visible() {
        let mut state = AppState::default();
        state.set_option(Facet::Cpu, "i7", true);
        assert_eq!(state.visible_records().count(), 0);
        assert!(state.export_visible(Path::new("unused.csv")).is_err());
    }

    #[test]
    fn background_load_delivers_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("laptops.csv");
        std::fs::write(&path, CSV).unwrap();

        let mut state = AppState::default();
        state.begin_load(path);
        assert!(state.loading);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !state.poll_load() {
            assert!(Instant::now() < deadline, "load timed out");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!state.loading);
        assert_eq!(state.visible_records().count(), 3);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn failed_background_load_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.begin_load(dir.path().join("missing.csv"));

        let deadline = Instant::now() + Duration::from_secs(5);
        while !state.poll_load() {
            assert!(Instant::now() < deadline, "load timed out");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(state.dataset.is_none());
        assert!(state.source.is_none());
        assert!(!state.loading);
        assert!(state.status_message.as_deref().unwrap().contains("missing.csv"));
    }

    fn wait_for_load(state: &mut AppState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !state.poll_load() {
            assert!(Instant::now() < deadline, "load timed out");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn failed_load_keeps_previous_source() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.csv");
        std::fs::write(&good, CSV).unwrap();

        let mut state = AppState::default();
        state.begin_load(good.clone());
        wait_for_load(&mut state);
        assert_eq!(state.source.as_deref(), Some(good.as_path()));

        state.begin_load(dir.path().join("missing.csv"));
        assert_eq!(state.source.as_deref(), Some(good.as_path()));
        wait_for_load(&mut state);

        assert!(state.status_message.is_some());
        assert_eq!(state.dataset.as_ref().map(Dataset::len), Some(3));
        assert_eq!(state.source.as_deref(), Some(good.as_path()));
    }
}
