use rstest::{fixture, rstest};
use simpost::config::CleanupConfig;
use simpost::prune::{PruneMode, SeriesPruner, build_series, run};
use std::fs;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

fn touch_series(dir: &Path, header: &str, numbers: impl IntoIterator<Item = i64>) {
    for n in numbers {
        File::create(dir.join(format!("{header}.{n}"))).unwrap();
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[rstest]
fn test_delete_series_end_to_end(temp_dir: TempDir) {
    touch_series(temp_dir.path(), "x", [20000, 30000, 40000]);

    let report = run(temp_dir.path(), ["x"], 20000, 40000, 10000, PruneMode::Series).unwrap();
    assert_eq!(report.deleted.len(), 3);
    assert!(file_names(temp_dir.path()).is_empty());

    let again = run(temp_dir.path(), ["x"], 20000, 40000, 10000, PruneMode::Series).unwrap();
    assert!(again.deleted.is_empty());
    assert!(again.is_clean());
}

#[rstest]
fn test_restart_cleanup_keeps_checkpoints(temp_dir: TempDir) {
    let numbers: Vec<i64> = (2000..=16000).step_by(250).collect();
    touch_series(temp_dir.path(), "x", numbers.iter().copied());
    touch_series(temp_dir.path(), "q", numbers.iter().copied());
    File::create(temp_dir.path().join("x.notes")).unwrap();

    let report = run(
        temp_dir.path(),
        ["x", "q"],
        2000,
        16000,
        1000,
        PruneMode::AllBut,
    )
    .unwrap();
    assert!(report.is_clean());

    let keep = build_series(2000, 16000, 1000).unwrap();
    let mut expected: Vec<String> = ["q", "x"]
        .iter()
        .flat_map(|h| keep.iter().map(move |n| format!("{h}.{n}")))
        .collect();
    expected.push("x.notes".to_string());
    expected.sort();

    assert_eq!(file_names(temp_dir.path()), expected);
}

#[rstest]
fn test_all_but_with_stride_one_deletes_nothing(temp_dir: TempDir) {
    touch_series(temp_dir.path(), "x", 0..=20);

    let report = run(temp_dir.path(), ["x"], 0, 20, 1, PruneMode::AllBut).unwrap();

    assert!(report.deleted.is_empty());
    assert_eq!(report.guarded, vec!["x".to_string()]);
    assert_eq!(file_names(temp_dir.path()).len(), 21);
}

#[rstest]
fn test_cleanup_config_drives_pruners(temp_dir: TempDir) {
    let runs = temp_dir.path().join("runs");
    fs::create_dir(&runs).unwrap();
    touch_series(&runs, "x.y0", [100, 200, 300, 400]);
    touch_series(&runs, "q.y0", [100, 150, 200]);

    let config_path = temp_dir.path().join("cleanup.yaml");
    fs::write(
        &config_path,
        format!(
            r#"
jobs:
  - directory: "{}"
    headers: ["x.y0"]
    start: 100
    end: 400
    stride: 200
  - directory: "{}"
    headers: ["q.y0"]
    start: 100
    end: 200
    stride: 100
    mode: all_but
"#,
            runs.display(),
            runs.display()
        ),
    )
    .unwrap();

    let config = CleanupConfig::from_file(&config_path).unwrap();
    let pruners = Vec::<SeriesPruner>::try_from(config).unwrap();
    for pruner in &pruners {
        assert!(pruner.run().is_clean());
    }

    assert_eq!(
        file_names(&runs),
        vec!["q.y0.100", "q.y0.200", "x.y0.200"]
    );
}
