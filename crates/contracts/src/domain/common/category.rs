use serde::{Deserialize, Serialize};

/// Specimen classification. The four named variants are the categories the
/// catalog understands; `Other` carries the raw sheet name for workbooks with
/// tabs outside the standard taxonomy (e.g. a "Minerals" sheet).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Igneous,
    Sedimentary,
    Metamorphic,
    OreSamples,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Igneous => "Igneous",
            Category::Sedimentary => "Sedimentary",
            Category::Metamorphic => "Metamorphic",
            Category::OreSamples => "Ore Samples",
            Category::Other(name) => name,
        }
    }

    /// Prefix used when a specimen code has to be synthesized:
    /// `O` for ore samples, otherwise the first letter of the category name.
    pub fn code_prefix(&self) -> char {
        match self {
            Category::OreSamples => 'O',
            other => other
                .as_str()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('S'),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Igneous" => Category::Igneous,
            "Sedimentary" => Category::Sedimentary,
            "Metamorphic" => Category::Metamorphic,
            "Ore Samples" => Category::OreSamples,
            _ => Category::Other(s),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_store_values() {
        assert_eq!(Category::OreSamples.to_string(), "Ore Samples");
        assert_eq!(Category::Other("Economic Geology".into()).to_string(), "Economic Geology");
    }

    #[test]
    fn test_string_roundtrip() {
        for c in [
            Category::Igneous,
            Category::Sedimentary,
            Category::Metamorphic,
            Category::OreSamples,
            Category::Other("Minerals".into()),
        ] {
            let s: String = c.clone().into();
            assert_eq!(Category::from(s), c);
        }
    }

    #[test]
    fn test_code_prefix() {
        assert_eq!(Category::Igneous.code_prefix(), 'I');
        assert_eq!(Category::Sedimentary.code_prefix(), 'S');
        assert_eq!(Category::Metamorphic.code_prefix(), 'M');
        assert_eq!(Category::OreSamples.code_prefix(), 'O');
        assert_eq!(Category::Other("minerals".into()).code_prefix(), 'M');
    }
}
