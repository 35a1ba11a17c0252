use crate::document::Document;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::Page;
use crate::text::{Font, TextEncoding};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use std::path::Path;

const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const FIRST_FONT_ID: u32 = 3;

/// Options that change the bytes the writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Flate-compress page content streams (needs the `compression` feature)
    pub compress_streams: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compress_streams: cfg!(feature = "compression"),
        }
    }
}

/// Serializes a [`Document`] as a PDF 1.7 file with a classic xref table.
///
/// Object numbers are assigned in a fixed order (catalog, pages tree, fonts,
/// then page/content pairs, then the info dictionary), so the same document
/// always yields the same bytes.
pub struct PdfWriter<W: Write> {
    writer: W,
    config: WriterConfig,
    xref_positions: BTreeMap<ObjectId, u64>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W, config: WriterConfig) -> Self {
        Self {
            writer,
            config,
            xref_positions: BTreeMap::new(),
            current_position: 0,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_header()?;

        let catalog_id = self.write_catalog()?;
        let fonts = self.write_fonts(&document.used_fonts())?;
        let next_id = FIRST_FONT_ID + fonts.len() as u32;
        let next_id = self.write_pages(document, &fonts, next_id)?;
        let info_id = self.write_info(document, ObjectId::new(next_id, 0))?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.7\n")?;
        // Binary comment so transfer tools treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(&mut self) -> Result<ObjectId> {
        let catalog_id = ObjectId::new(CATALOG_ID, 0);

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", ObjectId::new(PAGES_ID, 0));

        self.write_object(catalog_id, Object::Dictionary(catalog))?;
        Ok(catalog_id)
    }

    /// One shared font object per font, referenced from every page.
    fn write_fonts(&mut self, fonts: &[Font]) -> Result<Vec<(Font, ObjectId)>> {
        let mut written = Vec::with_capacity(fonts.len());
        for (i, font) in fonts.iter().enumerate() {
            let id = ObjectId::new(FIRST_FONT_ID + i as u32, 0);

            let mut font_dict = Dictionary::new();
            font_dict.set("Type", Object::name("Font"));
            font_dict.set("Subtype", Object::name("Type1"));
            font_dict.set("BaseFont", Object::name(font.pdf_name()));
            font_dict.set(
                "Encoding",
                Object::name(TextEncoding::WinAnsiEncoding.pdf_name()),
            );

            self.write_object(id, Object::Dictionary(font_dict))?;
            written.push((font.clone(), id));
        }
        Ok(written)
    }

    /// Writes the pages tree and every page; returns the next free object number.
    fn write_pages(
        &mut self,
        document: &Document,
        fonts: &[(Font, ObjectId)],
        first_id: u32,
    ) -> Result<u32> {
        let pages_id = ObjectId::new(PAGES_ID, 0);
        let page_ids: Vec<(ObjectId, ObjectId)> = (0..document.pages.len() as u32)
            .map(|i| {
                (
                    ObjectId::new(first_id + i * 2, 0),
                    ObjectId::new(first_id + i * 2 + 1, 0),
                )
            })
            .collect();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::name("Pages"));
        pages_dict.set(
            "Kids",
            Object::Array(
                page_ids
                    .iter()
                    .map(|(page_id, _)| Object::Reference(*page_id))
                    .collect(),
            ),
        );
        pages_dict.set("Count", document.pages.len() as i64);
        self.write_object(pages_id, Object::Dictionary(pages_dict))?;

        let mut font_resources = Dictionary::new();
        for (font, id) in fonts {
            font_resources.set(font.pdf_name(), *id);
        }

        for (page, (page_id, content_id)) in document.pages.iter().zip(&page_ids) {
            self.write_page(*page_id, pages_id, *content_id, page, &font_resources)?;
            self.write_page_content(*content_id, page)?;
        }

        Ok(first_id + page_ids.len() as u32 * 2)
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        parent_id: ObjectId,
        content_id: ObjectId,
        page: &Page,
        font_resources: &Dictionary,
    ) -> Result<()> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", parent_id);
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ]),
        );
        page_dict.set("Contents", content_id);

        let mut resources = Dictionary::new();
        resources.set("Font", font_resources.clone());
        page_dict.set("Resources", resources);

        self.write_object(page_id, Object::Dictionary(page_dict))
    }

    fn write_page_content(&mut self, content_id: ObjectId, page: &Page) -> Result<()> {
        #[cfg_attr(not(feature = "compression"), allow(unused_mut))]
        let mut stream = Stream::new(page.generate_content());

        #[cfg(feature = "compression")]
        if self.config.compress_streams {
            stream.compress_flate()?;
        }

        self.write_object(content_id, stream.into_object())
    }

    fn write_info(&mut self, document: &Document, info_id: ObjectId) -> Result<ObjectId> {
        let metadata = &document.metadata;
        let mut info_dict = Dictionary::new();

        let text_entries = [
            ("Title", &metadata.title),
            ("Author", &metadata.author),
            ("Subject", &metadata.subject),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                info_dict.set(key, Object::String(value.clone()));
            }
        }

        if let Some(creation_date) = metadata.creation_date {
            info_dict.set("CreationDate", format_pdf_date(creation_date));
        }
        if let Some(mod_date) = metadata.modification_date {
            info_dict.set("ModDate", format_pdf_date(mod_date));
        }

        self.write_object(info_id, Object::Dictionary(info_dict))?;
        Ok(info_id)
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>, config: WriterConfig) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file), config))
    }
}

impl<W: Write> PdfWriter<W> {
    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => {
                let encoded = encode_text_string(s);
                self.write_bytes(&encoded)?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                self.write_bytes(id.to_string().as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;

        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        let positions: BTreeMap<u32, u64> = self
            .xref_positions
            .iter()
            .map(|(id, pos)| (id.number(), *pos))
            .collect();

        for obj_num in 1..=max_obj_num {
            match positions.get(&obj_num) {
                Some(position) => {
                    self.write_bytes(format!("{position:010} 00000 n \n").as_bytes())?
                }
                None => self.write_bytes(b"0000000000 00000 f \n")?,
            }
        }

        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let mut trailer = Dictionary::new();
        trailer.set("Size", (max_obj_num + 1) as i64);
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// ASCII strings become escaped literals; anything else is written as
/// UTF-16BE hex with a byte order mark.
fn encode_text_string(text: &str) -> Vec<u8> {
    if text.is_ascii() {
        let mut out = Vec::with_capacity(text.len() + 2);
        out.push(b'(');
        for byte in text.bytes() {
            if matches!(byte, b'(' | b')' | b'\\') {
                out.push(b'\\');
            }
            out.push(byte);
        }
        out.push(b')');
        out
    } else {
        let mut hex = String::from("<FEFF");
        for unit in text.encode_utf16() {
            hex.push_str(&format!("{unit:04X}"));
        }
        hex.push('>');
        hex.into_bytes()
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    format!("{}+00'00", date.format("D:%Y%m%d%H%M%S"))
}
