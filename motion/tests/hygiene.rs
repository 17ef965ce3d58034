//! Source hygiene for the engine.
//!
//! The engine runs inside a page script where one panic takes every effect
//! down, so the production sources carry no panicking shortcuts and no
//! silently dropped results. Test siblings (`*_test.rs`) are exempt.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, allowed occurrences)`.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
    ("println!(", 0),
    ("dbg!(", 0),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut pending = vec![root];
    let mut found = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let is_rs = path.extension().is_some_and(|ext| ext == "rs");
            let is_test = path.file_name().is_some_and(|name| name.to_string_lossy().ends_with("_test.rs"));
            if is_rs && !is_test {
                if let Ok(text) = fs::read_to_string(&path) {
                    found.push((path, text));
                }
            }
        }
    }
    found.sort();
    found
}

/// Occurrences of `pattern` per file, skipping comment lines.
fn occurrences<'a>(sources: &'a [(PathBuf, String)], pattern: &str) -> Vec<(&'a Path, usize)> {
    sources
        .iter()
        .map(|(path, text)| {
            let hits = text.lines().filter(|line| !line.trim_start().starts_with("//") && line.contains(pattern)).count();
            (path.as_path(), hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let sources = production_sources();
    assert!(sources.iter().any(|(path, _)| path.ends_with("lib.rs")));
    assert!(sources.iter().all(|(path, _)| !path.to_string_lossy().ends_with("_test.rs")));
}

#[test]
fn no_pattern_exceeds_its_budget() {
    let sources = production_sources();
    let mut report = Vec::new();
    for &(pattern, budget) in BUDGETS {
        let hits = occurrences(&sources, pattern);
        let total: usize = hits.iter().map(|(_, n)| n).sum();
        if total > budget {
            report.push(format!("{pattern}: {total} (budget {budget})"));
            report.extend(hits.iter().map(|(path, n)| format!("    {}: {n}", path.display())));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn comment_lines_are_not_counted() {
    let sources = vec![(PathBuf::from("a.rs"), "// x.unwrap()\nlet y = z.unwrap();\n".to_owned())];
    assert_eq!(occurrences(&sources, ".unwrap()"), vec![(Path::new("a.rs"), 1)]);
}
