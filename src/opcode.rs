use std::fmt;

use crate::modes::AddressMode;

/// One entry of the generated opcode table: lowercased mnemonic,
/// addressing mode, base cycle count, and the zero-based position it
/// was emitted at (the synthetic opcode byte).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub function: String,
    pub address_mode: AddressMode,
    pub cycles: u8,
    pub index: usize,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Opcode{{ function: {}, address_mode: {}, cycles: {} }},\t\t//{:#x}",
            self.function, self.address_mode, self.cycles, self.index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Opcode;
    use crate::modes::AddressMode;

    #[test]
    fn renders_the_table_line_verbatim() {
        let op = Opcode {
            function: "adc".to_string(),
            address_mode: AddressMode::Immediate,
            cycles: 2,
            index: 0,
        };
        assert_eq!(
            op.to_string(),
            "Opcode{ function: adc, address_mode: immediate, cycles: 2 },\t\t//0x0"
        );
    }

    #[test]
    fn index_renders_as_lowercase_hex() {
        let op = Opcode {
            function: "lda".to_string(),
            address_mode: AddressMode::AbsoluteX,
            cycles: 4,
            index: 0xbd,
        };
        assert!(op.to_string().ends_with("//0xbd"));
    }
}
