use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{Dataset, Record};
use super::parser;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a catalogue from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` / no extension – header row plus comma-separated rows
/// * `.json` – `[{ "Brand": "...", "Model": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "" | "csv" | "txt" => parser::parse(&read_text(path)?),
        "json" => load_json(&read_text(path)?)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "Loaded {} records from {} with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.columns
    );
    let missing = dataset.missing_columns();
    if !missing.is_empty() {
        log::warn!("{} lacks expected columns {:?}", path.display(), missing);
    }
    Ok(dataset)
}

/// Write the header and the given rows of `dataset` as CSV.
pub fn export_csv(path: &Path, dataset: &Dataset, indices: &[usize]) -> Result<(), LoadError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&dataset.columns)?;
    for &i in indices {
        let record = &dataset.records[i];
        writer.write_record(dataset.columns.iter().map(|c| record.get(c)))?;
    }
    writer.flush()?;
    log::info!("Exported {} records to {}", indices.len(), path.display());
    Ok(())
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON: a top-level array of flat objects.
///
/// Strings are taken as-is, `null` becomes `""` and anything else is kept in
/// its JSON text form. Columns are the union of keys in first-seen order.
pub fn load_json(text: &str) -> Result<Dataset, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::JsonShape("expected a top-level array".into()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| LoadError::JsonShape(format!("row {i} is not an object")))?;

        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        let record: Record = obj
            .iter()
            .map(|(k, v)| (k.clone(), json_to_text(v)))
            .collect();
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::columns;

    #[test]
    fn loads_csv_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "Brand,Model,RAM\nDell,\"XPS 13, 2024\",16GB\n").unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].get(columns::MODEL), "XPS 13, 2024");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn unknown_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }

    #[test]
    fn json_records() {
        let ds = load_json(
            r#"[{"Brand": "Dell", "RAM": 16, "URL": null},
                {"Brand": "Acer", "Display": 15.6}]"#,
        )
        .unwrap();
        assert_eq!(ds.columns, vec!["Brand", "RAM", "URL", "Display"]);
        assert_eq!(ds.records[0].get("RAM"), "16");
        assert_eq!(ds.records[0].get("URL"), "");
        assert_eq!(ds.records[1].get("Display"), "15.6");
    }

    #[test]
    fn json_must_be_array_of_objects() {
        assert!(matches!(load_json("{}"), Err(LoadError::JsonShape(_))));
        assert!(matches!(load_json("[1, 2]"), Err(LoadError::JsonShape(_))));
        assert!(matches!(load_json("[oops"), Err(LoadError::Json(_))));
    }

    #[test]
    fn export_writes_selected_rows() {
        let ds = parser::parse("Brand,Model\nDell,\"XPS, 13\"\nAcer,Swift\nHP,Omen");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");

        export_csv(&out, &ds, &[0, 2]).unwrap();

        let reloaded = load_file(&out).unwrap();
        assert_eq!(reloaded.columns, ds.columns);
        assert_eq!(reloaded.records, vec![ds.records[0].clone(), ds.records[2].clone()]);
    }
}
