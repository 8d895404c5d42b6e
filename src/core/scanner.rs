//! Source file discovery.
//!
//! Resolves the configured include roots, walks them, and keeps every
//! JS/TS/JSX file that no ignore pattern claims.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

/// Compiled ignore configuration. A pattern with `*` or `?` is a glob
/// matched against the full path; anything else is a literal path prefix
/// under the project root.
struct IgnoreFilter {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreFilter {
    fn compile(base_dir: &str, patterns: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut globs = Vec::new();

        for raw in patterns {
            if has_wildcard(raw) {
                match Pattern::new(raw) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                raw,
                                e
                            );
                        }
                    }
                }
            } else {
                prefixes.push(Path::new(base_dir).join(raw));
            }
        }

        if ignore_test_files {
            // Validated constants; Pattern::new cannot fail on them.
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, globs }
    }

    fn matches(&self, path: &Path, path_str: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self.globs.iter().any(|pattern| pattern.matches(path_str))
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Expand the include list into concrete directories to walk. An empty
/// list means the whole project; wildcard entries go through `glob` so a
/// pattern like `packages/*/src` picks up every matching directory.
fn include_roots(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![PathBuf::from(base_dir)];
    }

    let mut roots = Vec::new();
    for entry in includes {
        if has_wildcard(entry) {
            let pattern = Path::new(base_dir).join(entry);
            match glob(&pattern.to_string_lossy()) {
                Ok(matches) => {
                    roots.extend(matches.flatten().filter(|path| path.is_dir()));
                }
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            entry,
                            e
                        );
                    }
                }
            }
        } else {
            let path = Path::new(base_dir).join(entry);
            if path.exists() {
                roots.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let filter = IgnoreFilter::compile(base_dir, ignore_patterns, ignore_test_files, verbose);

    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    for root in include_roots(base_dir, includes, verbose) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    // Unreadable directory entries are counted, not fatal.
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_source_extension(path) {
                continue;
            }

            let path_str = path.to_string_lossy();
            if filter.matches(path, &path_str) {
                continue;
            }

            files.insert(path_str.into_owned());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {};\n").unwrap();
    }

    #[test]
    fn collects_source_extensions_only() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "src/app.tsx");
        touch(tmp.path(), "src/util.ts");
        touch(tmp.path(), "src/readme.md");

        let result = scan_files(tmp.path().to_str().unwrap(), &[], &[], true, false);
        assert_eq!(result.files.len(), 2);
    }

    #[test]
    fn skips_test_files_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "src/app.tsx");
        touch(tmp.path(), "src/app.test.tsx");
        touch(tmp.path(), "src/__tests__/helper.ts");

        let result = scan_files(tmp.path().to_str().unwrap(), &[], &[], true, false);
        assert_eq!(result.files.len(), 1);

        let result = scan_files(tmp.path().to_str().unwrap(), &[], &[], false, false);
        assert_eq!(result.files.len(), 3);
    }

    #[test]
    fn honors_literal_ignore_paths() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "src/app.tsx");
        touch(tmp.path(), "vendor/lib.js");

        let result = scan_files(
            tmp.path().to_str().unwrap(),
            &[],
            &["vendor".to_string()],
            true,
            false,
        );
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn honors_glob_ignore_patterns() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "src/app.tsx");
        touch(tmp.path(), "src/generated/types.ts");

        let result = scan_files(
            tmp.path().to_str().unwrap(),
            &[],
            &["**/generated/**".to_string()],
            true,
            false,
        );
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn honors_include_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "src/app.tsx");
        touch(tmp.path(), "scripts/build.ts");

        let result = scan_files(
            tmp.path().to_str().unwrap(),
            &["src".to_string()],
            &[],
            true,
            false,
        );
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn expands_wildcard_includes() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "packages/a/src/app.tsx");
        touch(tmp.path(), "packages/b/src/lib.ts");
        touch(tmp.path(), "packages/b/docs/guide.ts");

        let result = scan_files(
            tmp.path().to_str().unwrap(),
            &["packages/*/src".to_string()],
            &[],
            true,
            false,
        );
        assert_eq!(result.files.len(), 2);
    }
}
