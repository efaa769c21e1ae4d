//! Page tree builder: one directory with a `README.md` per documentation
//! node, built on a single bounded worker pool.

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::model::DocumentationNode;
use crate::render::BodyRenderer;
use crate::summary;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use tracing::info;

/// File name of every page document.
pub const PAGE_FILE: &str = "README.md";

/// A rendered page on disk and its child pages, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Route relative to the book source root, without surrounding slashes
    pub route: String,
    pub name: String,
    pub children: Vec<Page>,
}

impl Page {
    /// Number of pages in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Page::count).sum::<usize>()
    }
}

/// Build every page under `out_dir` and write `SUMMARY.md`.
///
/// Routes are checked for uniqueness before anything is written. All nodes,
/// at every depth, share one pool of `config.jobs` threads.
pub fn generate(
    nodes: &[DocumentationNode],
    out_dir: &Path,
    renderer: &BodyRenderer<'_>,
    config: &BuildConfig,
) -> Result<Vec<Page>> {
    check_unique_routes(nodes)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .thread_name(|i| format!("page-builder-{}", i))
        .build()?;

    let builder = PageBuilder { out_dir, renderer };
    let pages = pool.install(|| builder.build_all(nodes))?;

    summary::write_summary(out_dir, &pages)?;
    info!(
        pages = pages.iter().map(Page::count).sum::<usize>(),
        "wrote {}",
        summary::SUMMARY_FILE
    );
    Ok(pages)
}

/// Turn a route into a directory path relative to the book source root.
/// "/reference/text/" → "reference/text", "/a/./b" → "a/b"
///
/// `..` segments are rejected so every page stays under the output root.
pub fn normalize_route(route: &str) -> Result<String> {
    let mut segments = Vec::new();
    for component in Path::new(route).components() {
        match component {
            Component::Normal(segment) => match segment.to_str() {
                Some(segment) => segments.push(segment),
                None => return Err(Error::InvalidRoute(route.to_string())),
            },
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir | Component::Prefix(_) => {
                return Err(Error::InvalidRoute(route.to_string()));
            }
        }
    }
    Ok(segments.join("/"))
}

/// Reject trees where a route is invalid or two nodes would write to the
/// same directory.
fn check_unique_routes(nodes: &[DocumentationNode]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut stack: Vec<&DocumentationNode> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        if !seen.insert(normalize_route(&node.route)?) {
            return Err(Error::DuplicateRoute(node.route.clone()));
        }
        stack.extend(node.children.iter());
    }
    Ok(())
}

struct PageBuilder<'a> {
    out_dir: &'a Path,
    renderer: &'a BodyRenderer<'a>,
}

impl PageBuilder<'_> {
    /// Build sibling nodes in parallel, keeping input order.
    ///
    /// A failing sibling does not stop the others; the first error in input
    /// order is returned once all of them are done.
    fn build_all(&self, nodes: &[DocumentationNode]) -> Result<Vec<Page>> {
        nodes
            .par_iter()
            .map(|node| self.build(node))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    fn build(&self, node: &DocumentationNode) -> Result<Page> {
        let route = normalize_route(&node.route)?;
        info!(route = %route, "generating page");

        let dir = self.out_dir.join(&route);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let content = node.body.content().map_err(|source| Error::MalformedNode {
            route: node.route.clone(),
            kind: node.body.kind.clone(),
            source,
        })?;
        let markdown = self.renderer.render(&content)?;

        let path = dir.join(PAGE_FILE);
        fs::write(&path, markdown).map_err(|e| Error::io(&path, e))?;

        Ok(Page {
            route,
            name: node.title.clone(),
            children: self.build_all(&node.children)?,
        })
    }
}
