//! Destinations for rendered markup.
//!
//! A [`MarkupSink`] receives the concatenated cards together with the id of
//! the container element they belong in. [`WriterSink`] emits the container
//! element itself to any writer; [`HostPage`] replaces the children of the
//! matching element in a parsed HTML page.

use anyhow::{Context, Result, anyhow};
use askama::Template;
use ego_tree::{NodeMut, NodeRef};
use scraper::{Html, Node, Selector};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub trait MarkupSink {
    fn inject(&mut self, container_id: &str, markup: &str) -> Result<()>;
}

#[derive(Template)]
#[template(source = r#"<div id="{{ id }}">{{ markup|safe }}</div>"#, ext = "html")]
struct Container<'a> {
    id: &'a str,
    markup: &'a str,
}

/// Writes `<div id="...">markup</div>` to the wrapped writer.
pub struct WriterSink<W>(W);

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> MarkupSink for WriterSink<W> {
    fn inject(&mut self, container_id: &str, markup: &str) -> Result<()> {
        let container = Container {
            id: container_id,
            markup,
        }
        .render()?;
        writeln!(self.0, "{container}")?;
        self.0.flush()?;
        Ok(())
    }
}

/// An HTML page held in memory whose container element receives the cards.
///
/// Injecting re-serializes the page, so the output is normalized HTML
/// (missing `head`/`body` are added, attribute quoting is unified).
#[derive(Debug, Clone)]
pub struct HostPage {
    html: String,
}

impl HostPage {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Reads the page from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("reading host page {}", path.display()))?;
        Ok(Self { html })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Writes the page to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.html)
            .with_context(|| format!("writing host page {}", path.display()))?;
        debug!(path = %path.display(), bytes = self.html.len(), "Host page written");
        Ok(())
    }
}

impl MarkupSink for HostPage {
    fn inject(&mut self, container_id: &str, markup: &str) -> Result<()> {
        let mut document = Html::parse_document(&self.html);
        let selector = container_selector(container_id)?;

        // First match in document order, like getElementById.
        let container = document
            .select(&selector)
            .next()
            .map(|element| element.id())
            .with_context(|| format!("container #{container_id} not found in host page"))?;

        let fragment = Html::parse_fragment(markup);
        let mut node = document
            .tree
            .get_mut(container)
            .with_context(|| format!("container #{container_id} not found in host page"))?;

        while let Some(mut child) = node.first_child() {
            child.detach();
        }
        for child in fragment.root_element().children() {
            append_subtree(&mut node, child);
        }

        self.html = document.html();
        debug!(container = container_id, bytes = self.html.len(), "Host page updated");
        Ok(())
    }
}

fn container_selector(id: &str) -> Result<Selector> {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    Selector::parse(&format!(r#"[id="{escaped}"]"#))
        .map_err(|e| anyhow!("invalid container id {id:?}: {e}"))
}

fn append_subtree(parent: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
    let mut copy = parent.append(source.value().clone());
    for child in source.children() {
        append_subtree(&mut copy, child);
    }
}
