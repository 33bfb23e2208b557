use std::fmt;

/// The twelve addressing modes the oxyron matrix abbreviates, spelled
/// the way the generated table wants them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    IndirectX,
    IndirectY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    Relative,
    Implied,
}

impl AddressMode {
    /// Maps the page's abbreviation to a mode. The matrix leaves the
    /// token off entirely for implied addressing, so the empty string
    /// maps to `Implied`. Anything else unknown is `None` — callers
    /// treat that as fatal rather than guessing a default.
    pub fn from_abbreviation(abbr: &str) -> Option<AddressMode> {
        Some(match abbr {
            "imm" => AddressMode::Immediate,
            "zp" => AddressMode::ZeroPage,
            "zpx" => AddressMode::ZeroPageX,
            "zpy" => AddressMode::ZeroPageY,
            "izx" => AddressMode::IndirectX,
            "izy" => AddressMode::IndirectY,
            "abs" => AddressMode::Absolute,
            "abx" => AddressMode::AbsoluteX,
            "aby" => AddressMode::AbsoluteY,
            "ind" => AddressMode::Indirect,
            "rel" => AddressMode::Relative,
            "" => AddressMode::Implied,
            _ => return None,
        })
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            AddressMode::Immediate => "immediate",
            AddressMode::ZeroPage => "zero_page",
            AddressMode::ZeroPageX => "zero_page_x",
            AddressMode::ZeroPageY => "zero_page_y",
            AddressMode::IndirectX => "indirect_x",
            AddressMode::IndirectY => "indirect_y",
            AddressMode::Absolute => "absolute",
            AddressMode::AbsoluteX => "absolute_x",
            AddressMode::AbsoluteY => "absolute_y",
            AddressMode::Indirect => "indirect",
            AddressMode::Relative => "relative",
            AddressMode::Implied => "implied",
        }
    }
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
