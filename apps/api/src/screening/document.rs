use bytes::Bytes;

/// An uploaded résumé: a named byte blob whose format is declared by the
/// filename extension. Consumed once by the extractor, never persisted.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(filename: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Lowercased filename extension, or an empty string when there is none.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }
}
