use crate::shared::error::GraphError;
use crate::shared::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::io::{Cursor, Read};

/// File name suffix of the package manifest inside a .nupkg archive
pub const MANIFEST_SUFFIX: &str = ".nuspec";

/// Opening of a dependency declaration element
const DEPENDENCY_MARKER: &str = "<dependency";

/// DependencyExtractor service for reading dependency ids out of a package archive
///
/// This service contains pure logic: it works on in-memory archive bytes and
/// performs no I/O.
pub struct DependencyExtractor;

impl DependencyExtractor {
    /// Extracts the dependency identifiers declared in the archive's manifest
    ///
    /// The first entry whose name ends with `.nuspec` is used as the manifest.
    /// Identifiers are returned in document order and are not de-duplicated.
    ///
    /// # Returns
    /// The declared identifiers, or an empty list when the archive contains no
    /// manifest entry
    ///
    /// # Errors
    /// Returns `GraphError::Format` if:
    /// - The bytes are not a readable zip archive
    /// - The manifest is not valid UTF-8
    /// - A dependency declaration lacks a well-formed `id` attribute
    pub fn extract(archive: &[u8]) -> Result<Vec<String>> {
        match Self::read_manifest(archive)? {
            Some(manifest) => Self::parse_manifest(&manifest),
            None => Ok(Vec::new()),
        }
    }

    /// Reads the manifest text from the archive, if the archive has one
    fn read_manifest(archive: &[u8]) -> Result<Option<String>> {
        let mut zip = zip::ZipArchive::new(Cursor::new(archive))
            .map_err(|e| GraphError::format(format!("Not a valid zip archive: {}", e)))?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index).map_err(|e| {
                GraphError::format(format!("Failed to read archive entry #{}: {}", index, e))
            })?;

            if entry.is_dir() || !entry.name().ends_with(MANIFEST_SUFFIX) {
                continue;
            }

            let name = entry.name().to_string();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes).map_err(|e| {
                GraphError::format(format!("Failed to decompress manifest {}: {}", name, e))
            })?;

            let text = String::from_utf8(bytes).map_err(|e| {
                GraphError::format(format!("Manifest {} is not valid UTF-8: {}", name, e))
            })?;

            return Ok(Some(text));
        }

        Ok(None)
    }

    /// Scans manifest text line by line and collects one id per declaration line
    pub fn parse_manifest(manifest: &str) -> Result<Vec<String>> {
        manifest
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                find_declaration(line).map(|start| parse_declaration(&line[start..], index + 1))
            })
            .collect()
    }
}

/// Returns the byte offset of the first `<dependency` element tag on the line
///
/// Only the `dependency` element itself counts: the name must end at
/// whitespace, `/`, `>` or the end of the line. Lines whose only match is a
/// longer name sharing the prefix (`<dependencies>`, `<dependencyGroups>`)
/// are not declaration lines and are skipped instead of failing for lack of
/// an `id`.
fn find_declaration(line: &str) -> Option<usize> {
    line.match_indices(DEPENDENCY_MARKER)
        .map(|(start, _)| start)
        .find(|&start| {
            line[start + DEPENDENCY_MARKER.len()..]
                .chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || c == '/' || c == '>')
        })
}

/// Reads the `id` attribute of the declaration that starts `fragment`
fn parse_declaration(fragment: &str, line_number: usize) -> Result<String> {
    let malformed = |reason: String| -> anyhow::Error {
        GraphError::format(format!(
            "Malformed dependency declaration on manifest line {}: {}",
            line_number, reason
        ))
        .into()
    };

    let tag = start_tag(fragment);
    let mut reader = Reader::from_str(&tag);
    let element = match reader.read_event() {
        Ok(Event::Start(e)) | Ok(Event::Empty(e)) => e,
        Ok(other) => return Err(malformed(format!("unexpected XML event {:?}", other))),
        Err(e) => return Err(malformed(e.to_string())),
    };

    let id = element
        .try_get_attribute("id")
        .map_err(|e| malformed(e.to_string()))?
        .ok_or_else(|| malformed("missing id attribute".to_string()))?;

    let value = id
        .unescape_value()
        .map_err(|e| malformed(e.to_string()))?
        .into_owned();

    if value.is_empty() {
        return Err(malformed("empty id attribute".to_string()));
    }

    Ok(value)
}

/// Cuts the start tag at the beginning of `fragment`
///
/// A tag whose attributes continue on the next line is closed at the end of
/// this line, so attributes complete on the marker line can still be read.
fn start_tag(fragment: &str) -> Cow<'_, str> {
    let mut quote = None;
    for (index, c) in fragment.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), c) if c == open => quote = None,
            (None, '>') => return Cow::Borrowed(&fragment[..=index]),
            _ => {}
        }
    }
    Cow::Owned(format!("{}/>", fragment.trim_end()))
}
