use super::FlowRecord;
use ahash::AHashMap;

/// The full rule set, keyed by primary flow code.
///
/// Inserting a record under an existing code replaces it, the same way the
/// source table treats the code as its primary key.
#[derive(Debug, Clone, Default)]
pub struct FlowTable {
    records: AHashMap<String, FlowRecord>,
}

/// Which field of a record a search query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Code,
    Name,
    Mapping,
}

/// One fuzzy-search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub code: String,
    pub name: String,
    pub mapping: String,
    pub field: MatchField,
}

impl FlowTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: FlowRecord) -> Option<FlowRecord> {
        self.records.insert(record.code.clone(), record)
    }

    pub fn get(&self, code: &str) -> Option<&FlowRecord> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowRecord> {
        self.records.values()
    }

    /// Resolves a secondary mapping code to the owning record's primary
    /// code. Linear scan; observed tables are small. With no table loaded
    /// there is no reverse lookup at all, which is why callers that need
    /// aliasing must hold a snapshot.
    pub fn find_code_by_mapping(&self, mapping: &str) -> Option<&str> {
        self.records
            .values()
            .find(|record| record.mapping == mapping)
            .map(|record| record.code.as_str())
    }

    /// Case-insensitive substring search over code, name and mapping, in
    /// that order of precedence per record. An empty query matches
    /// nothing. Hits are sorted by code for stable output.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut hits: Vec<SearchHit> = self
            .records
            .values()
            .filter_map(|record| {
                let field = if record.code.to_lowercase().contains(&needle) {
                    MatchField::Code
                } else if record.name.to_lowercase().contains(&needle) {
                    MatchField::Name
                } else if record.mapping.to_lowercase().contains(&needle) {
                    MatchField::Mapping
                } else {
                    return None;
                };
                Some(SearchHit {
                    code: record.code.clone(),
                    name: record.name.clone(),
                    mapping: record.mapping.clone(),
                    field,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.code.cmp(&b.code));
        hits
    }
}

impl FromIterator<FlowRecord> for FlowTable {
    fn from_iter<I: IntoIterator<Item = FlowRecord>>(iter: I) -> Self {
        let mut table = FlowTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}
