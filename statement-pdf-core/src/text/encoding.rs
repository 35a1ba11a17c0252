/// Text encodings used for standard-font strings in content streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEncoding {
    /// Windows-1252; covers the German and French letters in the statement.
    WinAnsiEncoding,
}

impl TextEncoding {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            TextEncoding::WinAnsiEncoding => "WinAnsiEncoding",
        }
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::WinAnsiEncoding => {
                let mut result = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match ch as u32 {
                        0x00..=0x7F => result.push(ch as u8),
                        0xA0..=0xFF => result.push(ch as u8),
                        0x20AC => result.push(0x80), // Euro sign
                        0x201A => result.push(0x82), // Single low quotation mark
                        0x201E => result.push(0x84), // Double low quotation mark
                        0x2026 => result.push(0x85), // Horizontal ellipsis
                        0x2030 => result.push(0x89), // Per mille sign
                        0x0160 => result.push(0x8A), // S with caron
                        0x2039 => result.push(0x8B), // Single left angle quotation mark
                        0x0152 => result.push(0x8C), // OE ligature
                        0x2018 => result.push(0x91), // Left single quotation mark
                        0x2019 => result.push(0x92), // Right single quotation mark
                        0x201C => result.push(0x93), // Left double quotation mark
                        0x201D => result.push(0x94), // Right double quotation mark
                        0x2022 => result.push(0x95), // Bullet
                        0x2013 => result.push(0x96), // En dash
                        0x2014 => result.push(0x97), // Em dash
                        0x2122 => result.push(0x99), // Trade mark sign
                        0x0161 => result.push(0x9A), // s with caron
                        0x203A => result.push(0x9B), // Single right angle quotation mark
                        0x0153 => result.push(0x9C), // oe ligature
                        _ => result.push(b'?'),
                    }
                }
                result
            }
        }
    }
}
