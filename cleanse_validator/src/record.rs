//! Record representation for validation.
//!
//! A record is one input line split into ordered string fields. Records are
//! immutable once parsed: validation classifies them, never mutates them.

/// One parsed input line.
///
/// Splitting preserves empty trailing fields (`"a,b,,"` has four fields),
/// and fields borrow from the original line; nothing is copied.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    raw: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Parses a line into fields on the given delimiter.
    pub fn parse(line: &'a str, delimiter: char) -> Self {
        Self {
            raw: line,
            fields: line.split(delimiter).collect(),
        }
    }

    /// The original line text, exactly as provided.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The field at `index`, untrimmed.
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// All fields in order.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_preserves_empty_trailing_fields() {
        let record = Record::parse("a,b,,", ',');
        assert_eq!(record.len(), 4);
        assert_eq!(record.fields(), &["a", "b", "", ""]);
    }

    #[test]
    fn fields_are_untrimmed() {
        let record = Record::parse("a, b ,c", ',');
        assert_eq!(record.field(1), Some(" b "));
    }

    #[test]
    fn out_of_range_index_is_none() {
        let record = Record::parse("a,b", ',');
        assert_eq!(record.field(2), None);
    }

    #[test]
    fn custom_delimiter() {
        let record = Record::parse("a\tb\tc", '\t');
        assert_eq!(record.len(), 3);
        assert_eq!(record.raw(), "a\tb\tc");
    }
}
