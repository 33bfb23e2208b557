use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ExtractError;
use crate::modes::AddressMode;
use crate::opcode::Opcode;

/// The contiguous run of `td` elements holding the opcode matrix,
/// as positions in document order.
///
/// The default bounds were measured against the live page: the cells
/// before position 18 are the legend, and the matrix ends at 288.
/// Nothing in the markup marks these boundaries, so if the page is ever
/// restructured the bounds have to be re-measured by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSlice {
    pub start: usize,
    pub end: usize,
}

impl Default for TableSlice {
    fn default() -> Self {
        TableSlice { start: 18, end: 289 }
    }
}

/// Section-heading cells carry an enlarged font and are not opcodes.
const HEADING_MARKER: &str = "font size=\"+1\"";

pub struct Extractor {
    slice: TableSlice,
    cells: Selector,
    mnemonic: Regex,
    mode: Regex,
    cycles: Regex,
}

impl Extractor {
    pub fn new(slice: TableSlice) -> Extractor {
        // The field patterns run over each cell's raw markup, not its
        // text content: the mnemonic is the first uppercase run after a
        // tag close, the mode token the first lowercase run, and the
        // cycle count a single digit butting up against a `*` or the
        // next tag.
        Extractor {
            slice,
            cells: Selector::parse("td").unwrap(),
            mnemonic: Regex::new(r">([A-Z]+)").unwrap(),
            mode: Regex::new(r">([a-z]+)").unwrap(),
            cycles: Regex::new(r"([0-9])[*<]").unwrap(),
        }
    }

    /// Walks the sliced cell list and produces one record per opcode
    /// cell, numbered 0..n in document order. Heading cells are skipped
    /// and consume no index.
    pub fn extract(&self, html: &str) -> Result<Vec<Opcode>, ExtractError> {
        let document = Html::parse_document(html);
        let cells: Vec<String> = document.select(&self.cells).map(|td| td.html()).collect();
        log::info!("Found {} table cells", cells.len());

        let matrix = cells
            .get(self.slice.start..self.slice.end)
            .ok_or(ExtractError::TooFewCells {
                found: cells.len(),
                needed: self.slice.end,
            })?;

        let mut opcodes = Vec::new();
        for (offset, markup) in matrix.iter().enumerate() {
            // Document-order position, so errors point at the actual cell.
            let cell = self.slice.start + offset;

            if markup.contains(HEADING_MARKER) {
                log::debug!("cell {}: heading, skipped", cell);
                continue;
            }

            let function = self
                .mnemonic
                .captures(markup)
                .map(|c| c[1].to_lowercase())
                .ok_or(ExtractError::MissingMnemonic { index: cell })?;

            let token = self
                .mode
                .captures(markup)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            let address_mode = AddressMode::from_abbreviation(&token).ok_or_else(|| {
                ExtractError::UnknownAddressMode {
                    index: cell,
                    token: token.clone(),
                }
            })?;

            let cycles = self
                .cycles
                .captures(markup)
                .and_then(|c| c[1].parse::<u8>().ok())
                .unwrap_or(0);

            opcodes.push(Opcode {
                function,
                address_mode,
                cycles,
                index: opcodes.len(),
            });
        }

        log::info!("Extracted {} opcodes", opcodes.len());
        Ok(opcodes)
    }
}
