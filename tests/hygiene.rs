//! Hygiene: source-level budgets for the board crate.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that crash the page or
//! drop errors on the floor. Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn source_files(root: &Path) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(root, &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

/// Per-file line counts containing `pattern`, skipping `//` comment lines.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

fn assert_budget(root: &str, pattern: &str, max: usize) {
    let files = source_files(Path::new(root));
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded in {root}: found {count}, max {max}.\n{listing}");
}

macro_rules! budget {
    ($name:ident, $root:literal, $pattern:literal, $max:expr) => {
        #[test]
        fn $name() {
            assert_budget($root, $pattern, $max);
        }
    };
}

// Panics: these take down the whole page.
budget!(unwrap_budget, "src", ".unwrap()", 0);
budget!(expect_budget, "src", ".expect(", 0);
budget!(panic_budget, "src", "panic!(", 0);
budget!(unreachable_budget, "src", "unreachable!(", 0);
budget!(todo_budget, "src", "todo!(", 0);
budget!(unimplemented_budget, "src", "unimplemented!(", 0);

// Silent loss: errors discarded without being looked at.
budget!(silent_discard_budget, "src", "let _ =", 0);
budget!(dot_ok_budget, "src", ".ok()", 0);

// Structure.
budget!(allow_dead_code_budget, "src", "#[allow(dead_code)]", 0);

// Game and state logic stays host-testable: no direct browser bindings.
budget!(game_web_sys_budget, "src/game", "web_sys::", 0);
budget!(state_web_sys_budget, "src/state", "web_sys::", 0);
budget!(state_wasm_bindgen_budget, "src/state", "wasm_bindgen", 0);
