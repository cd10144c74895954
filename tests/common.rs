#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("wellness")
}

/// Unique scratch directory inside the system temp dir, emptied first
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wellness_it", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a config file whose exports land in `dir`, return its path
pub fn setup_config(dir: &PathBuf, extra: &str) -> String {
    let cfg = dir.join("config.yml");
    let body = format!("export_dir: {}\n{}", dir.display(), extra);
    fs::write(&cfg, body).expect("write config");
    cfg.to_string_lossy().to_string()
}

/// Session command that adds one entry inline
pub fn add_line(name: &str, activity: &str, metime: &str, minutes: i64) -> String {
    format!("add --name {name} --activity {activity} --metime {metime} --minutes {minutes}\n")
}

/// Read the first worksheet of an XLSX file as text rows
pub fn read_xlsx(path: &PathBuf) -> Vec<Vec<String>> {
    use calamine::{Data, Reader, Xlsx, open_workbook};

    let mut wb: Xlsx<_> = open_workbook(path).expect("open xlsx");
    let sheet = wb.sheet_names().first().cloned().expect("one sheet");
    let range = wb.worksheet_range(&sheet).expect("read sheet");

    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| match c {
                    Data::String(s) => s.clone(),
                    Data::Float(f) => format!("{f}"),
                    Data::Int(i) => i.to_string(),
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect()
}
