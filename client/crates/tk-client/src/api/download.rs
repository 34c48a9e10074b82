use bytes::Bytes;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A server-generated file and the name to save it under
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl Download {
    pub fn xlsx(filename: String, bytes: Bytes) -> Self {
        Self {
            filename,
            content_type: XLSX_CONTENT_TYPE,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
