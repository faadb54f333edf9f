//! Column declarations and the per-grid registry.

/// One potential grid column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Stable key, also the entity field key (`placa`, `empresa`, ...).
    pub key: String,
    /// Header label shown to the user.
    pub label: String,
    /// Required columns can never be hidden (`placa`, `acciones`).
    pub required: bool,
    /// Whether the column is part of the default visible set.
    pub default_visible: bool,
}

impl ColumnConfig {
    /// An optional column, visible by default.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
            default_visible: true,
        }
    }

    /// A required column: always visible, immune to toggling.
    #[must_use]
    pub fn required(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(key, label)
        }
    }

    /// Marks the column as hidden unless the user opts in.
    #[must_use]
    pub fn hidden_by_default(mut self) -> Self {
        self.default_visible = false;
        self
    }
}

/// The full set of columns a grid can show, in declaration order.
///
/// Declaration order is canonical: whatever the user toggles and in
/// whichever sequence, visible columns are always reported in this order.
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: Vec<ColumnConfig>,
}

impl ColumnRegistry {
    /// Builds a registry from declarations. Later duplicates of a key are
    /// ignored.
    #[must_use]
    pub fn new(columns: Vec<ColumnConfig>) -> Self {
        let mut seen = Vec::new();
        let mut unique = Vec::new();
        for column in columns {
            if seen.contains(&column.key) {
                continue;
            }
            seen.push(column.key.clone());
            unique.push(column);
        }
        Self { columns: unique }
    }

    /// Looks up a column by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// True when the registry declares `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys of the required columns, in declaration order.
    #[must_use]
    pub fn required_keys(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.required)
            .map(|c| c.key.clone())
            .collect()
    }

    /// The fixed default visible set: required and default-visible columns,
    /// in declaration order.
    #[must_use]
    pub fn default_keys(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.required || c.default_visible)
            .map(|c| c.key.clone())
            .collect()
    }

    /// Filters `keys` down to known ones and returns them in declaration
    /// order, with required keys force-included.
    #[must_use]
    pub fn repair<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let wanted: Vec<&str> = keys.into_iter().filter(|k| self.contains(k)).collect();
        self.columns
            .iter()
            .filter(|c| c.required || wanted.contains(&c.key.as_str()))
            .map(|c| c.key.clone())
            .collect()
    }

    /// Iterates over the declared columns.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnConfig> {
        self.columns.iter()
    }

    /// Number of declared columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no column is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
