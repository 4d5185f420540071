//! Source hygiene for the turtle tank.
//!
//! Scans the production sources of both packages, `src/` and `canvas/src/`,
//! with the `_test.rs` siblings left out. A turtle program runs inside a
//! host's script or frame callback where a panic ends the session, so errors
//! are returned or logged through `tracing` and never printed or dropped.
//! Blocking and locking are confined to the one module that owns each.

use std::fs;
use std::path::{Path, PathBuf};

const SOURCE_ROOTS: [&str; 2] = ["src", "canvas/src"];

/// A set of patterns and how many lines may contain any of them.
struct Budget {
    name: &'static str,
    patterns: &'static [&'static str],
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { name: "unwrap", patterns: &[".unwrap()"], max: 0 },
    Budget { name: "expect", patterns: &[".expect("], max: 0 },
    Budget {
        name: "panicking macro",
        patterns: &["panic!(", "unreachable!(", "todo!(", "unimplemented!("],
        max: 0,
    },
    Budget { name: "discarded result", patterns: &["let _ =", ".ok()"], max: 0 },
    Budget { name: "stdout/stderr", patterns: &["print!(", "println!(", "dbg!("], max: 0 },
    Budget { name: "dead code allowance", patterns: &["allow(dead_code)"], max: 0 },
    // `round_half_up` in the cursor.
    Budget { name: "cast lint allowance", patterns: &["allow(clippy::cast_"], max: 1 },
];

/// A pattern that may only appear in files whose path ends with `home`.
struct Confinement {
    pattern: &'static str,
    home: &'static str,
}

const CONFINEMENTS: &[Confinement] = &[
    Confinement { pattern: "thread::sleep(", home: "src/pacing.rs" },
    Confinement { pattern: ".lock()", home: "canvas/src/engine.rs" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn source_files() -> Vec<SourceFile> {
    let root = workspace_root();
    let mut files = Vec::new();
    for dir in SOURCE_ROOTS {
        collect(&root, &root.join(dir), &mut files);
    }
    assert!(!files.is_empty(), "no sources found under {}", root.display());
    files
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            out.push(SourceFile { path: rel.to_string_lossy().replace('\\', "/"), content });
        }
    }
}

/// `(path, line number, line)` for every line containing one of `patterns`.
fn hits<'a>(files: &'a [SourceFile], patterns: &[&str]) -> Vec<(&'a str, usize, &'a str)> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| patterns.iter().any(|p| line.contains(p)))
                .map(|(i, line)| (file.path.as_str(), i + 1, line.trim()))
        })
        .collect()
}

fn report(found: &[(&str, usize, &str)]) -> String {
    found
        .iter()
        .map(|(path, line, text)| format!("  {path}:{line}: {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn both_packages_are_scanned() {
    let files = source_files();
    for expected in ["src/cursor.rs", "src/config.rs", "src/pacing.rs", "canvas/src/engine.rs"] {
        assert!(
            files.iter().any(|f| f.path == expected),
            "{expected} missing from the scan"
        );
    }
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.patterns);
        if found.len() > budget.max {
            failures.push(format!(
                "{}: found {}, max {}\n{}",
                budget.name,
                found.len(),
                budget.max,
                report(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn confined_patterns_stay_home() {
    let files = source_files();
    let mut strays = Vec::new();
    for rule in CONFINEMENTS {
        let outside: Vec<_> = hits(&files, &[rule.pattern])
            .into_iter()
            .filter(|(path, _, _)| *path != rule.home)
            .collect();
        if !outside.is_empty() {
            strays.push(format!("`{}` belongs in {}\n{}", rule.pattern, rule.home, report(&outside)));
        }
    }
    assert!(strays.is_empty(), "{}", strays.join("\n"));
}
