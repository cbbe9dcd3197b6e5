use crate::navigation::RecordId;

/// A literal content item addressable from a detail page.
pub trait Record {
    fn matches(&self, id: &RecordId) -> bool;
}

/// Compile-time form of `RecordId` for the literal content tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticId {
    Num(i64),
    Slug(&'static str),
}

impl StaticId {
    pub fn to_record_id(self) -> RecordId {
        match self {
            StaticId::Num(n) => RecordId::Number(n),
            StaticId::Slug(s) => RecordId::from(s),
        }
    }

    /// Strict: `Num(2)` never matches the text `"2"`.
    pub fn matches(self, id: &RecordId) -> bool {
        match (self, id) {
            (StaticId::Num(a), RecordId::Number(b)) => a == *b,
            (StaticId::Slug(a), RecordId::Text(b)) => a == b.as_str(),
            _ => false,
        }
    }
}

/// Outcome of looking a detail id up in a page-local table.
#[derive(Debug, PartialEq)]
pub enum Resolution<'a, T> {
    Found(&'a T),
    FallbackUsed(&'a T),
}

impl<'a, T> Resolution<'a, T> {
    pub fn record(&self) -> &'a T {
        match self {
            Resolution::Found(record) | Resolution::FallbackUsed(record) => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::FallbackUsed(_))
    }
}

/// Finds the record named by `id`, falling back to the first entry when the
/// id is absent or unknown. Only an empty table yields `None`; callers decide
/// how to report a fallback.
pub fn resolve<'a, T: Record>(records: &'a [T], id: Option<&RecordId>) -> Option<Resolution<'a, T>> {
    if let Some(found) = id.and_then(|id| records.iter().find(|r| r.matches(id))) {
        return Some(Resolution::Found(found));
    }
    records.first().map(Resolution::FallbackUsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: RecordId,
        name: &'static str,
    }

    impl Record for Item {
        fn matches(&self, id: &RecordId) -> bool {
            &self.id == id
        }
    }

    fn table() -> Vec<Item> {
        vec![
            Item { id: RecordId::Number(1), name: "first" },
            Item { id: RecordId::Number(2), name: "second" },
            Item { id: RecordId::from("expansion"), name: "text" },
        ]
    }

    #[test]
    fn finds_matching_record() {
        let items = table();
        let hit = resolve(&items, Some(&RecordId::Number(2))).unwrap();
        assert_eq!(hit, Resolution::Found(&items[1]));
        assert!(!hit.is_fallback());

        let text = resolve(&items, Some(&RecordId::from("expansion"))).unwrap();
        assert_eq!(text.record().name, "text");
    }

    #[test]
    fn unknown_or_missing_id_falls_back_to_first() {
        let items = table();
        for id in [None, Some(RecordId::Number(99)), Some(RecordId::from("2"))] {
            let resolution = resolve(&items, id.as_ref()).unwrap();
            assert!(resolution.is_fallback());
            assert_eq!(resolution.record().name, "first");
        }
    }

    #[test]
    fn static_ids_compare_strictly() {
        assert!(StaticId::Num(2).matches(&RecordId::Number(2)));
        assert!(!StaticId::Num(2).matches(&RecordId::from("2")));
        assert!(StaticId::Slug("expansion").matches(&RecordId::from("expansion")));
        assert_eq!(StaticId::Slug("f1").to_record_id(), RecordId::from("f1"));
    }

    #[test]
    fn empty_table_resolves_to_nothing() {
        let items: Vec<Item> = Vec::new();
        assert!(resolve(&items, Some(&RecordId::Number(1))).is_none());
    }
}
