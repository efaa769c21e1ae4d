//! mdBook `SUMMARY.md` generation from the built page tree.

use crate::error::{Error, Result};
use crate::page::{Page, PAGE_FILE};
use crate::render::escape_link_text;
use std::fs;
use std::path::Path;

pub const SUMMARY_FILE: &str = "SUMMARY.md";

/// Render every page, depth-first, as a nested list.
pub fn render_summary(pages: &[Page]) -> String {
    let mut output = String::new();
    for page in pages {
        render_entry(&mut output, 0, page);
    }
    output
}

/// Write `SUMMARY.md` into `out_dir`.
pub fn write_summary(out_dir: &Path, pages: &[Page]) -> Result<()> {
    let path = out_dir.join(SUMMARY_FILE);
    fs::write(&path, render_summary(pages)).map_err(|e| Error::io(&path, e))
}

fn render_entry(output: &mut String, indent: usize, page: &Page) {
    output.push_str(&"  ".repeat(indent));
    output.push_str(&format!(
        "- [{}]({})\n",
        escape_link_text(&page.name),
        page_link(&page.route)
    ));
    for child in &page.children {
        render_entry(output, indent + 1, child);
    }
}

/// Link to a page document relative to the book source root.
fn page_link(route: &str) -> String {
    if route.is_empty() {
        PAGE_FILE.to_string()
    } else {
        format!("{}/{}", route, PAGE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(route: &str, name: &str, children: Vec<Page>) -> Page {
        Page {
            route: route.to_string(),
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn single_entry() {
        let pages = vec![page("intro", "Intro", vec![])];
        assert_eq!(render_summary(&pages), "- [Intro](intro/README.md)\n");
    }

    #[test]
    fn indentation_follows_depth() {
        let pages = vec![
            page(
                "reference",
                "Reference",
                vec![
                    page(
                        "reference/text",
                        "Text",
                        vec![page("reference/text/lower", "Lower", vec![])],
                    ),
                    page("reference/math", "Math", vec![]),
                ],
            ),
            page("changelog", "Changelog", vec![]),
        ];
        assert_eq!(
            render_summary(&pages),
            "- [Reference](reference/README.md)\n\
             \x20\x20- [Text](reference/text/README.md)\n\
             \x20\x20\x20\x20- [Lower](reference/text/lower/README.md)\n\
             \x20\x20- [Math](reference/math/README.md)\n\
             - [Changelog](changelog/README.md)\n"
        );
    }

    #[test]
    fn root_route_links_to_root_readme() {
        let pages = vec![page("", "Overview", vec![])];
        assert_eq!(render_summary(&pages), "- [Overview](README.md)\n");
    }

    #[test]
    fn names_cannot_break_entries() {
        let pages = vec![page("a", "Arrays [and]\nSlices", vec![])];
        assert_eq!(
            render_summary(&pages),
            "- [Arrays \\[and\\] Slices](a/README.md)\n"
        );
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        write_summary(dir.path(), &[page("a", "A", vec![])]).unwrap();
        let written = fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
        assert_eq!(written, "- [A](a/README.md)\n");
    }
}
