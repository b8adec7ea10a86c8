//! Locating generated regions in a document.
//!
//! Regions are line-oriented: a header line containing
//! `@generated begin <tag> -` and a later footer line ending in
//! `@generated end <tag>`. The comment prefix in front of either marker is not
//! inspected, so the same scan works for Groovy, Kotlin or shell files.

use regex::Regex;
use std::sync::LazyLock;

/// A well-formed generated region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The tag shared by the header and footer.
    pub tag: String,
    /// Body fingerprint recorded in the header (`sync-<hex>`), if any.
    pub fingerprint: Option<String>,
    /// The lines between the header and footer.
    pub body: String,
    /// The 1-based line number of the header.
    pub start_line: usize,
    /// The 1-based line number of the footer.
    pub end_line: usize,
}

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@generated begin (\S+) -").expect("Invalid header marker regex")
});

static FINGERPRINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bsync-([0-9a-f]+)\b").expect("Invalid fingerprint regex")
});

/// Marker text identifying the header line of `tag`.
pub(crate) fn begin_marker(tag: &str) -> String {
    format!("@generated begin {tag} -")
}

/// Marker text that the footer line of `tag` ends with.
pub(crate) fn end_marker(tag: &str) -> String {
    format!("@generated end {tag}")
}

fn is_footer(line: &str, marker: &str) -> bool {
    line.trim_end_matches('\r').ends_with(marker)
}

/// Zero-based `(header, footer)` line indexes of the first well-formed region
/// tagged `tag`.
pub(crate) fn locate(lines: &[&str], tag: &str) -> Option<(usize, usize)> {
    let begin = begin_marker(tag);
    let end = end_marker(tag);

    let Some(start) = lines.iter().position(|line| line.contains(&begin)) else {
        if lines.iter().any(|line| is_footer(line, &end)) {
            tracing::warn!(tag, "footer without header; leaving it in place");
        }
        return None;
    };

    match lines[start + 1..]
        .iter()
        .position(|line| is_footer(line, &end))
    {
        Some(offset) => Some((start, start + 1 + offset)),
        None => {
            tracing::warn!(tag, line = start + 1, "header without footer; leaving it in place");
            None
        }
    }
}

fn region_from_lines(lines: &[&str], tag: &str, start: usize, end: usize) -> Region {
    let fingerprint = FINGERPRINT_REGEX
        .captures(lines[start])
        .map(|caps| caps[1].to_string());

    Region {
        tag: tag.to_string(),
        fingerprint,
        body: lines[start + 1..end].join("\n"),
        start_line: start + 1,
        end_line: end + 1,
    }
}

/// Parses every well-formed region in the document, in order of appearance.
///
/// # Example
/// ```
/// use wallet_blocks::parser::parse_regions;
///
/// let content = "buildscript {}
/// // @generated begin libs-repo - wallet prebuild (DO NOT MODIFY) sync-abc123
/// allprojects {}
/// // @generated end libs-repo";
///
/// let regions = parse_regions(content);
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].tag, "libs-repo");
/// assert_eq!(regions[0].fingerprint.as_deref(), Some("abc123"));
/// ```
pub fn parse_regions(content: &str) -> Vec<Region> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut regions = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let Some(caps) = HEADER_REGEX.captures(lines[cursor]) else {
            cursor += 1;
            continue;
        };
        let tag = &caps[1];
        let end = end_marker(tag);

        match lines[cursor + 1..]
            .iter()
            .position(|line| is_footer(line, &end))
        {
            Some(offset) => {
                let footer = cursor + 1 + offset;
                regions.push(region_from_lines(&lines, tag, cursor, footer));
                cursor = footer + 1;
            }
            None => cursor += 1,
        }
    }

    regions
}

/// Finds the region tagged `tag`, ignoring unpaired markers.
///
/// # Example
/// ```
/// use wallet_blocks::parser::find_region;
///
/// let content = "// @generated begin libs-repo - wallet prebuild (DO NOT MODIFY) sync-00
/// google()
/// // @generated end libs-repo";
///
/// let region = find_region(content, "libs-repo").unwrap();
/// assert_eq!(region.body, "google()");
/// assert_eq!((region.start_line, region.end_line), (1, 3));
/// ```
pub fn find_region(content: &str, tag: &str) -> Option<Region> {
    let lines: Vec<&str> = content.split('\n').collect();
    let (start, end) = locate(&lines, tag)?;
    Some(region_from_lines(&lines, tag, start, end))
}

/// Checks whether a well-formed region tagged `tag` exists.
pub fn has_region(content: &str, tag: &str) -> bool {
    let lines: Vec<&str> = content.split('\n').collect();
    locate(&lines, tag).is_some()
}
