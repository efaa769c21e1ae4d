//! mdBook scaffolding: `book.toml`, the `src/` directory and static assets.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const BOOK_FILE: &str = "book.toml";
pub const SOURCE_DIR: &str = "src";
pub const ASSETS_DIR: &str = "assets";

/// Create `out_dir` and its `src/` directory if missing, and (re)write
/// `book.toml`. Returns the book source directory.
pub fn create_book(out_dir: &Path, title: &str) -> Result<PathBuf> {
    let src = out_dir.join(SOURCE_DIR);
    fs::create_dir_all(&src).map_err(|e| Error::io(&src, e))?;

    let book_file = out_dir.join(BOOK_FILE);
    fs::write(&book_file, book_toml(title)?).map_err(|e| Error::io(&book_file, e))?;
    Ok(src)
}

#[derive(Serialize)]
struct BookToml<'a> {
    book: BookSection<'a>,
    build: BuildSection,
}

#[derive(Serialize)]
struct BookSection<'a> {
    language: &'a str,
    multilingual: bool,
    src: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct BuildSection {
    #[serde(rename = "create-missing")]
    create_missing: bool,
}

fn book_toml(title: &str) -> Result<String> {
    let manifest = BookToml {
        book: BookSection {
            language: "en",
            multilingual: false,
            src: SOURCE_DIR,
            title,
        },
        build: BuildSection {
            create_missing: false,
        },
    };
    Ok(toml::to_string(&manifest)?)
}

/// Recursively copy `from` into `to`, merging with whatever is already there.
/// Existing files are overwritten. Returns the number of files copied.
pub fn copy_assets(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(from).to_path_buf();
            Error::io(path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| Error::io(&target, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scaffolds_book() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("book");
        let src = create_book(&out, "Typst MdBook Docs").unwrap();

        assert_eq!(src, out.join("src"));
        assert!(src.is_dir());
        let toml = fs::read_to_string(out.join(BOOK_FILE)).unwrap();
        assert!(toml.contains("title = \"Typst MdBook Docs\""));
        assert!(toml.contains("src = \"src\""));
        assert!(toml.contains("create-missing = false"));
    }

    #[test]
    fn scaffold_is_idempotent() {
        let dir = TempDir::new().unwrap();
        create_book(dir.path(), "A").unwrap();
        fs::write(dir.path().join("src").join("keep.md"), "x").unwrap();
        create_book(dir.path(), "B").unwrap();

        assert!(dir.path().join("src").join("keep.md").exists());
        let toml = fs::read_to_string(dir.path().join(BOOK_FILE)).unwrap();
        assert!(toml.contains("title = \"B\""));
    }

    #[test]
    fn title_round_trips() {
        for title in ["say \"hi\"", "Typst\nDocs", "back\\slash\ttab"] {
            let parsed: toml::Table = toml::from_str(&book_toml(title).unwrap()).unwrap();
            assert_eq!(parsed["book"]["title"].as_str(), Some(title));
            assert_eq!(parsed["build"]["create-missing"].as_bool(), Some(false));
        }
    }

    #[test]
    fn copies_nested_assets_and_merges() {
        let from = TempDir::new().unwrap();
        fs::create_dir_all(from.path().join("img")).unwrap();
        fs::write(from.path().join("style.css"), "body{}").unwrap();
        fs::write(from.path().join("img").join("logo.svg"), "<svg/>").unwrap();

        let to = TempDir::new().unwrap();
        let dest = to.path().join("assets");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("existing.txt"), "keep").unwrap();
        fs::write(dest.join("style.css"), "old").unwrap();

        assert_eq!(copy_assets(from.path(), &dest).unwrap(), 2);
        assert_eq!(fs::read_to_string(dest.join("style.css")).unwrap(), "body{}");
        assert!(dest.join("img").join("logo.svg").exists());
        assert!(dest.join("existing.txt").exists());
    }

    #[test]
    fn missing_asset_dir_is_an_error() {
        let to = TempDir::new().unwrap();
        let err = copy_assets(Path::new("/nonexistent/assets"), to.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
