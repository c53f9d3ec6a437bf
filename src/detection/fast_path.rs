//! Linear fast path
//!
//!     Used once content exceeds the fast-path threshold. No patterns run here: marker types are
//!     found with substring scans over one ASCII-lowercased copy of the content (ASCII lowercasing
//!     keeps byte offsets aligned with the original), and list/table/heading structure comes from
//!     a single pass over the lines.
//!
//!     Precision is lower than the pattern path and components may overlap. Every component
//!     produced here carries `detection = fast-path` metadata.

use super::component::{ComponentType, DetectedComponent};
use super::patterns::fast_path_markers;
use crate::config::DetectionConfig;
use std::collections::BTreeSet;

/// Run the fast path over `content`. The result is not sorted.
pub fn scan(content: &str, config: &DetectionConfig) -> Vec<DetectedComponent> {
    let lowered = content.to_ascii_lowercase();
    let index = LineIndex::new(content);
    let mut components = Vec::new();

    for ty in ComponentType::SPECIFICITY_ORDER {
        components.extend(scan_markers(content, &lowered, &index, ty, config));
    }
    components.extend(scan_lines(content, config));
    components
}

/// One component per line containing a marker phrase for `ty`.
///
/// Hits inside a line that is already claimed are skipped in constant time, and the scan
/// stops once `max_matches_per_type` lines are claimed.
fn scan_markers(
    content: &str,
    lowered: &str,
    index: &LineIndex,
    ty: ComponentType,
    config: &DetectionConfig,
) -> Vec<DetectedComponent> {
    let markers = fast_path_markers(ty);
    if markers.is_empty() || config.max_matches_per_type == 0 {
        return Vec::new();
    }

    let mut lines = BTreeSet::new();
    'markers: for marker in markers {
        let mut claimed_until = 0;
        for (pos, _) in lowered.match_indices(marker) {
            if pos < claimed_until {
                continue;
            }
            let bounds = index.bounds(pos);
            claimed_until = bounds.1;
            lines.insert(bounds);
            if lines.len() >= config.max_matches_per_type {
                break 'markers;
            }
        }
    }

    lines
        .into_iter()
        .map(|(start, end)| fast_component(content, ty, start, end, config))
        .collect()
}

/// Line start offsets, built once per scan.
struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    fn new(content: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            starts,
            len: content.len(),
        }
    }

    /// Byte range of the line containing `pos`, without its newline.
    fn bounds(&self, pos: usize) -> (usize, usize) {
        let line = self
            .starts
            .partition_point(|&start| start <= pos)
            .saturating_sub(1);
        let start = self.starts[line];
        let end = self
            .starts
            .get(line + 1)
            .map_or(self.len, |next| next - 1);
        (start, end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Title,
    Section,
    ListItem,
    TableRow,
    Other,
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("# ") {
        LineKind::Title
    } else if trimmed.starts_with("## ") {
        LineKind::Section
    } else if is_list_line(trimmed) {
        LineKind::ListItem
    } else if trimmed.starts_with('|') {
        LineKind::TableRow
    } else {
        LineKind::Other
    }
}

fn is_list_line(trimmed: &str) -> bool {
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 && matches!(bytes[0], b'-' | b'*' | b'+') && bytes[1] == b' ' {
        return true;
    }
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    digits > 0
        && bytes.len() > digits + 1
        && matches!(bytes[digits], b'.' | b')')
        && bytes[digits + 1] == b' '
}

/// A run of consecutive lines of one kind: (start byte, end byte, line count).
struct Run {
    start: usize,
    end: usize,
    lines: usize,
}

/// Heading and list structure from a single pass over the lines.
fn scan_lines(content: &str, config: &DetectionConfig) -> Vec<DetectedComponent> {
    let mut components = Vec::new();
    let mut seen_content = false;
    let mut section_start: Option<usize> = None;
    let mut list_run: Option<Run> = None;
    let mut table_run: Option<Run> = None;
    let mut sections = 0usize;
    let mut lists = 0usize;
    let mut tables = 0usize;

    let mut offset = 0usize;
    for raw in content.split_inclusive('\n') {
        let line_start = offset;
        let line_end = offset + raw.trim_end_matches(['\n', '\r']).len();
        offset += raw.len();

        let kind = classify(raw);

        if kind == LineKind::Title && !seen_content {
            components.push(
                fast_component(content, ComponentType::Hero, line_start, line_end, config)
                    .with_metadata("lines", "1"),
            );
        }
        if kind != LineKind::Blank {
            seen_content = true;
        }

        if kind == LineKind::Section {
            if let Some(start) = section_start.take() {
                if sections < config.max_matches_per_type {
                    components.push(section(content, start, line_start, config));
                    sections += 1;
                }
            }
            section_start = Some(line_start);
        }

        if let Some(run) = extend_run(&mut list_run, kind == LineKind::ListItem, line_start, line_end) {
            if run.lines >= 2 && lists < config.max_matches_per_type {
                components.push(run_component(content, ComponentType::List, run, config));
                lists += 1;
            }
        }
        if let Some(run) = extend_run(&mut table_run, kind == LineKind::TableRow, line_start, line_end) {
            if run.lines >= 2 && tables < config.max_matches_per_type {
                components.push(run_component(content, ComponentType::Table, run, config));
                tables += 1;
            }
        }
    }

    if let Some(start) = section_start {
        if sections < config.max_matches_per_type {
            components.push(section(content, start, content.len(), config));
        }
    }
    for (run, ty, count) in [
        (list_run, ComponentType::List, lists),
        (table_run, ComponentType::Table, tables),
    ] {
        if let Some(run) = run {
            if run.lines >= 2 && count < config.max_matches_per_type {
                components.push(run_component(content, ty, run, config));
            }
        }
    }

    components
}

/// Grow the current run when `matches`, otherwise close it and hand it back.
fn extend_run(current: &mut Option<Run>, matches: bool, start: usize, end: usize) -> Option<Run> {
    if matches {
        match current {
            Some(run) => {
                run.end = end;
                run.lines += 1;
            }
            None => {
                *current = Some(Run {
                    start,
                    end,
                    lines: 1,
                })
            }
        }
        None
    } else {
        current.take()
    }
}

fn section(content: &str, start: usize, end: usize, config: &DetectionConfig) -> DetectedComponent {
    let end = start + content[start..end].trim_end().len();
    fast_component(content, ComponentType::ContentSection, start, end, config)
}

fn run_component(
    content: &str,
    ty: ComponentType,
    run: Run,
    config: &DetectionConfig,
) -> DetectedComponent {
    fast_component(content, ty, run.start, run.end, config)
        .with_metadata("lines", run.lines.to_string())
}

fn fast_component(
    content: &str,
    ty: ComponentType,
    start: usize,
    end: usize,
    config: &DetectionConfig,
) -> DetectedComponent {
    DetectedComponent::new(ty, start, end)
        .with_content(&content[start..end], config.snippet_length)
        .with_metadata("detection", "fast-path")
}
