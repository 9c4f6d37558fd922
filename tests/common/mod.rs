//! Shared fixtures for racedb integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A race record in the input wire format
pub fn race_json(raceid: Value, discipline: &str) -> Value {
    json!({
        "raceid": raceid,
        "codex": 2345,
        "date": "2019-02-23",
        "nation": "AUT",
        "location": "Seefeld",
        "category": "WSC",
        "discipline": discipline,
        "hasDetails": true,
        "results": [
            {"rank": 1, "fiscode": 3420586, "time": "2:45.10"},
            {"rank": 2, "fiscode": 3422819, "time": "2:45.62"}
        ]
    })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    serde_json::from_str(&text).unwrap()
}

/// raceids listed under `key` in the document at `path`
pub fn raceids(path: &Path, key: &str) -> Vec<u64> {
    read_json(path)[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["raceid"].as_u64().unwrap())
        .collect()
}

/// The racedb binary, run inside `dir` with no environment overrides
pub fn racedb(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("racedb").unwrap();
    cmd.current_dir(dir)
        .env_remove("RACEDB_OUTPUT_DIR")
        .env_remove("RACEDB_ON_MISSING_FIELD");
    cmd
}
