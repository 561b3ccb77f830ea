//! The core metadata field table.
//!
//! Every field recognized by the codec is listed in [`FIELDS`], in the order
//! used when writing headers. Each entry records whether the field may appear
//! more than once in a `METADATA` file. The JSON key of a field is derived
//! from its header name with [`json_key`].

/// A core metadata field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Field {
    /// The canonical header name, e.g. `Requires-Dist`.
    name: &'static str,
    /// Whether the field may appear multiple times.
    multiple_use: bool,
}

impl Field {
    const fn single(name: &'static str) -> Self {
        Self {
            name,
            multiple_use: false,
        }
    }

    const fn multiple(name: &'static str) -> Self {
        Self {
            name,
            multiple_use: true,
        }
    }

    /// The canonical header name of the field.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the field may appear multiple times in a header block.
    pub const fn is_multiple_use(&self) -> bool {
        self.multiple_use
    }

    /// The key used for this field in the JSON form, e.g. `requires_dist`.
    pub fn key(&self) -> String {
        json_key(self.name)
    }

    /// Look up a field by its JSON key.
    pub fn from_key(key: &str) -> Option<&'static Self> {
        FIELDS.iter().find(|field| field.key() == key)
    }
}

/// All recognized core metadata fields, in output order.
pub const FIELDS: &[Field] = &[
    Field::single("Metadata-Version"),
    Field::single("Name"),
    Field::single("Version"),
    Field::multiple("Dynamic"),
    Field::multiple("Platform"),
    Field::multiple("Supported-Platform"),
    Field::single("Summary"),
    Field::single("Description"),
    Field::single("Description-Content-Type"),
    Field::single("Keywords"),
    Field::single("Home-page"),
    Field::single("Download-URL"),
    Field::single("Author"),
    Field::single("Author-email"),
    Field::single("Maintainer"),
    Field::single("Maintainer-email"),
    Field::single("License"),
    Field::multiple("Classifier"),
    Field::multiple("Requires-Dist"),
    Field::single("Requires-Python"),
    Field::multiple("Requires-External"),
    Field::multiple("Project-URL"),
    Field::multiple("Provides-Extra"),
    Field::multiple("Provides-Dist"),
    Field::multiple("Obsoletes-Dist"),
];

/// Convert a header name into its JSON key: lowercase, with `-` replaced by `_`.
pub fn json_key(name: &str) -> String {
    name.to_ascii_lowercase().replace('-', "_")
}
