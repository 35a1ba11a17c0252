#[cfg(feature = "compression")]
use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object};

#[derive(Debug, Clone)]
pub struct Stream {
    dictionary: Dictionary,
    data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.set("Length", data.len() as i64);

        Self { dictionary, data }
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.dictionary.set("Filter", Object::name(filter));
    }

    #[cfg(feature = "compression")]
    pub fn compress_flate(&mut self) -> Result<()> {
        use flate2::write::ZlibEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&self.data)
            .map_err(|e| PdfError::CompressionError(e.to_string()))?;
        let compressed = encoder
            .finish()
            .map_err(|e| PdfError::CompressionError(e.to_string()))?;

        self.data = compressed;
        self.dictionary.set("Length", self.data.len() as i64);
        self.set_filter("FlateDecode");

        Ok(())
    }

    pub fn into_object(self) -> Object {
        Object::Stream(self.dictionary, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_new() {
        let data = b"BT /F1 9 Tf ET".to_vec();
        let stream = Stream::new(data.clone());

        assert_eq!(stream.data, data);
        assert_eq!(stream.dictionary.get("Length"), Some(&Object::Integer(14)));
    }

    #[test]
    fn test_set_filter() {
        let mut stream = Stream::new(vec![1, 2, 3]);
        stream.set_filter("FlateDecode");
        assert_eq!(
            stream.dictionary.get("Filter"),
            Some(&Object::Name("FlateDecode".to_string()))
        );
    }

    #[test]
    fn test_into_object() {
        let stream = Stream::new(vec![0x42]);
        match stream.into_object() {
            Object::Stream(dict, data) => {
                assert_eq!(dict.get("Length"), Some(&Object::Integer(1)));
                assert_eq!(data, vec![0x42]);
            }
            other => panic!("Expected stream object, got {other:?}"),
        }
    }

    #[test]
    #[cfg(feature = "compression")]
    fn test_compress_flate() {
        let original_data = "40 700 Td (COOP Zürich) Tj\n".repeat(20).into_bytes();
        let mut stream = Stream::new(original_data.clone());

        stream.compress_flate().unwrap();

        assert_ne!(stream.data, original_data);
        assert!(stream.data.len() < original_data.len());
        assert_eq!(
            stream.dictionary.get("Filter"),
            Some(&Object::Name("FlateDecode".to_string()))
        );
        assert_eq!(
            stream.dictionary.get("Length"),
            Some(&Object::Integer(stream.data.len() as i64))
        );
    }
}
