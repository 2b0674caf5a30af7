/// Where the encoded grid is persisted between sessions (the URL hash on
/// the web). Values are stored without a leading `#`.
pub trait StateStore {
    fn load(&self) -> String;
    fn save(&mut self, encoded: &str);
}

/// In-memory store for hosts without a URL and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: String,
    writes: usize,
}

impl MemoryStore {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            writes: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> String {
        self.value.clone()
    }

    fn save(&mut self, encoded: &str) {
        self.value = encoded.to_string();
        self.writes += 1;
    }
}
