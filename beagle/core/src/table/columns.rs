/// Header of the synthetic first column holding the occurrence number.
///
/// The spelling matches exported tables from earlier Beagle releases.
pub const OCCURRENCE_HEADER: &str = "Occurence";

/// Upper-cases the first character and lower-cases the rest:
/// `process_id` becomes `Process_id`, `userAgent` becomes `Useragent`.
pub fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Distinct column names in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<String>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` unless already present. Returns whether it was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.columns.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The header row: the occurrence column followed by every column.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(OCCURRENCE_HEADER.to_string())
            .chain(self.columns.iter().cloned())
            .collect()
    }
}
