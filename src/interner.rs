use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

/// A thread-safe identifier interning table.
///
/// When interning is enabled (see
/// [`ParseOptions::intern_identifiers`](crate::ParseOptions)), every
/// distinct identifier spelling is stored here once and all tokens
/// carrying that spelling share the same `Arc<str>`. A single interner
/// can be handed to many tokenizers, including from multiple threads,
/// to share name storage across documents.
///
/// Interning changes memory behavior only; token and AST values
/// compare equal with or without it.
#[derive(Debug, Default)]
pub struct NameInterner {
    table: Mutex<HashSet<Arc<str>>>,
}

impl NameInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared `Arc<str>` for `text`, inserting it on first
    /// sight.
    pub fn intern(&self, text: &str) -> Arc<str> {
        let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = table.get(text) {
            return Arc::clone(existing);
        }
        let entry: Arc<str> = Arc::from(text);
        table.insert(Arc::clone(&entry));
        entry
    }

    /// Number of distinct spellings interned so far.
    pub fn len(&self) -> usize {
        self.table.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
