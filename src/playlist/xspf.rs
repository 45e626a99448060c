//! XSPF serialization with VLC's folder-tree extension.
//!
//! The document carries the same tracks twice: once as the flat XSPF
//! `trackList`, where each track's `vlc:id` holds its id, and once inside the
//! top-level VLC `extension` as nested `vlc:node` folders whose `vlc:item`
//! elements point back with `tid`. VLC matches the two by these numbers.

use super::{Playlist, PlaylistTrack, TrackId, TrackNode};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use vidtree_common::{Error, Result};

/// Default namespace of the document.
pub const XSPF_NS: &str = "http://xspf.org/ns/0/";

/// Namespace bound to the `vlc` prefix.
pub const VLC_NS: &str = "http://www.videolan.org/vlc/playlist/ns/0/";

/// `application` attribute of every VLC `extension` element.
pub const VLC_APPLICATION: &str = "http://www.videolan.org/vlc/playlist/0";

const INDENT_SIZE: usize = 4;

/// Write `playlist` as an indented UTF-8 XSPF document.
pub fn write_playlist<W: Write>(playlist: &Playlist, out: W) -> Result<()> {
    let mut xml = XspfWriter {
        writer: Writer::new_with_indent(out, b' ', INDENT_SIZE),
    };

    xml.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.start(BytesStart::new("playlist").with_attributes([
        ("xmlns", XSPF_NS),
        ("xmlns:vlc", VLC_NS),
        ("version", "1"),
    ]))?;

    xml.text_element("title", &playlist.title)?;

    if playlist.tracks.is_empty() {
        xml.event(Event::Empty(BytesStart::new("trackList")))?;
    } else {
        xml.start(BytesStart::new("trackList"))?;
        for track in &playlist.tracks {
            xml.track(track)?;
        }
        xml.end("trackList")?;
    }

    let extension = vlc_extension();
    if playlist.nodes.is_empty() {
        xml.event(Event::Empty(extension))?;
    } else {
        xml.start(extension)?;
        for node in &playlist.nodes {
            xml.node(node)?;
        }
        xml.end("extension")?;
    }

    xml.end("playlist")?;
    xml.writer.get_mut().write_all(b"\n")?;
    Ok(())
}

fn vlc_extension() -> BytesStart<'static> {
    BytesStart::new("extension").with_attributes([("application", VLC_APPLICATION)])
}

struct XspfWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XspfWriter<W> {
    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(Error::xml)
    }

    fn start(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.event(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(BytesStart::new(name))?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn track(&mut self, track: &PlaylistTrack) -> Result<()> {
        self.start(BytesStart::new("track"))?;
        self.text_element("location", track.location.as_str())?;
        self.text_element("duration", &track.duration_ms.to_string())?;
        self.start(vlc_extension())?;
        self.text_element("vlc:id", &track.id.to_string())?;
        self.end("extension")?;
        self.end("track")
    }

    fn item(&mut self, id: TrackId) -> Result<()> {
        let tid = id.to_string();
        self.event(Event::Empty(
            BytesStart::new("vlc:item").with_attributes([("tid", tid.as_str())]),
        ))
    }

    fn node(&mut self, node: &TrackNode) -> Result<()> {
        let start = BytesStart::new("vlc:node").with_attributes([("title", node.title.as_str())]);
        if node.is_empty() {
            return self.event(Event::Empty(start));
        }

        self.start(start)?;
        for &id in &node.track_ids {
            self.item(id)?;
        }
        for child in &node.children {
            self.node(child)?;
        }
        self.end("vlc:node")
    }
}
