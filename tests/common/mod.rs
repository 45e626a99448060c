//! Shared test harness for integration tests.
//!
//! Provides [`MediaTree`], a temporary folder of empty video files, a
//! [`FakeProber`] with canned durations, and [`parse_playlist`] which reads a
//! written XSPF document back into plain structs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tempfile::TempDir;
use vidtree_av::{DurationProber, Error as ProbeError};

/// A temporary media library.
pub struct MediaTree {
    pub dir: TempDir,
}

impl MediaTree {
    /// Create the library with an empty file at each relative path.
    pub fn with_files(files: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for rel in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"").unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}

/// Returns durations by file name; unknown names fail to probe.
#[derive(Default)]
pub struct FakeProber {
    durations: HashMap<String, i64>,
}

impl FakeProber {
    pub fn new(durations: &[(&str, i64)]) -> Self {
        Self {
            durations: durations
                .iter()
                .map(|(name, ms)| (name.to_string(), *ms))
                .collect(),
        }
    }
}

impl DurationProber for FakeProber {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn probe_duration_ms(&self, path: &Path) -> vidtree_av::Result<i64> {
        let name = path.file_name().unwrap().to_string_lossy();
        self.durations
            .get(name.as_ref())
            .copied()
            .ok_or_else(|| ProbeError::tool_failed("fake", format!("no duration for {name}")))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedTrack {
    pub location: String,
    pub duration: i64,
    pub id: usize,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedNode {
    pub title: String,
    pub items: Vec<usize>,
    pub children: Vec<ParsedNode>,
}

impl ParsedNode {
    pub fn all_items(&self) -> Vec<usize> {
        let mut items = self.items.clone();
        for child in &self.children {
            items.extend(child.all_items());
        }
        items
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedPlaylist {
    pub title: String,
    pub tracks: Vec<ParsedTrack>,
    pub nodes: Vec<ParsedNode>,
}

impl ParsedPlaylist {
    /// Every `vlc:item tid` in document order.
    pub fn item_ids(&self) -> Vec<usize> {
        self.nodes.iter().flat_map(ParsedNode::all_items).collect()
    }
}

fn attr(element: &BytesStart<'_>, name: &str) -> String {
    element
        .try_get_attribute(name)
        .unwrap()
        .unwrap_or_else(|| panic!("missing attribute {name}"))
        .unescape_value()
        .unwrap()
        .into_owned()
}

fn attach(parsed: &mut ParsedPlaylist, stack: &mut [ParsedNode], node: ParsedNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => parsed.nodes.push(node),
    }
}

/// Parse a playlist written by vidtree.
pub fn parse_playlist(xml: &str) -> ParsedPlaylist {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut parsed = ParsedPlaylist::default();
    let mut open: Vec<String> = Vec::new();
    let mut nodes: Vec<ParsedNode> = Vec::new();

    loop {
        match reader.read_event().expect("invalid XML") {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                match name.as_str() {
                    "track" => parsed.tracks.push(ParsedTrack::default()),
                    "vlc:node" => nodes.push(ParsedNode {
                        title: attr(&e, "title"),
                        ..Default::default()
                    }),
                    _ => {}
                }
                open.push(name);
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"vlc:item" => nodes
                    .last_mut()
                    .expect("vlc:item outside vlc:node")
                    .items
                    .push(attr(&e, "tid").parse().unwrap()),
                b"vlc:node" => {
                    let node = ParsedNode {
                        title: attr(&e, "title"),
                        ..Default::default()
                    };
                    attach(&mut parsed, &mut nodes, node);
                }
                _ => {}
            },
            Event::Text(t) => {
                let text = t.unescape().unwrap().into_owned();
                match open.last().map(String::as_str) {
                    Some("title") => parsed.title = text,
                    Some("location") => parsed.tracks.last_mut().unwrap().location = text,
                    Some("duration") => {
                        parsed.tracks.last_mut().unwrap().duration = text.parse().unwrap()
                    }
                    Some("vlc:id") => parsed.tracks.last_mut().unwrap().id = text.parse().unwrap(),
                    _ => {}
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"vlc:node" {
                    let node = nodes.pop().expect("unbalanced vlc:node");
                    attach(&mut parsed, &mut nodes, node);
                }
                open.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    parsed
}
