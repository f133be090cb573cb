use models::kind::{RecordKind, RouteTarget};
use models::record::{Record, RecordId};

/// One listing cell: plain text, a record id, or a link to another view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Id(RecordId),
    Link { text: String, target: RouteTarget },
}

/// A listing column: stable key plus the user-facing label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

/// Builds header and row projections for one record kind's listing.
///
/// The fixed `id` and `name` columns come first; caller-supplied base
/// columns follow, with duplicates of an already-placed key dropped.
#[derive(Clone, Copy, Debug)]
pub struct ListBuilder {
    kind: RecordKind,
}

impl ListBuilder {
    pub fn new(kind: RecordKind) -> Self {
        Self { kind }
    }

    /// Header columns: `id`, `name`, then the base columns.
    pub fn header(&self, base: &[Column]) -> Vec<Column> {
        let mut header = vec![
            Column::new("id", format!("{} ID", self.kind.display_name())),
            Column::new("name", "Name"),
        ];
        for col in base {
            if header.iter().any(|c| c.key == col.key) {
                continue;
            }
            header.push(col.clone());
        }
        header
    }

    /// Row cells for one record. The name cell links to the record's edit
    /// form; an empty label still yields a valid link.
    pub fn row(&self, record: &Record, base: &[(String, Cell)]) -> Vec<(String, Cell)> {
        let mut row: Vec<(String, Cell)> = vec![
            ("id".to_string(), Cell::Id(record.id)),
            (
                "name".to_string(),
                Cell::Link {
                    text: record.label.clone(),
                    target: self.kind.edit_target(record.id),
                },
            ),
        ];
        for (key, cell) in base {
            if row.iter().any(|(k, _)| k == key) {
                continue;
            }
            row.push((key.clone(), cell.clone()));
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_leads_with_fixed_columns() {
        let builder = ListBuilder::new(RecordKind::Category);
        let base = vec![
            Column::new("operations", "Operations"),
            Column::new("id", "shadowed"),
        ];
        let header = builder.header(&base);

        assert_eq!(header[0].key, "id");
        assert_eq!(header[0].label, "Reservation Category ID");
        assert_eq!(header[1].key, "name");
        assert_eq!(header[1].label, "Name");
        // base column kept, colliding base key dropped
        assert_eq!(header.len(), 3);
        assert_eq!(header[2].key, "operations");

        let header = ListBuilder::new(RecordKind::Reservation).header(&[]);
        assert_eq!(header[0].label, "Reservation ID");
        assert_eq!(header.len(), 2);
    }

    #[test]
    fn row_links_label_to_edit_form() {
        let builder = ListBuilder::new(RecordKind::Category);
        let record = Record { id: 7, label: "Room A".into() };
        let row = builder.row(&record, &[]);

        assert_eq!(row[0], ("id".to_string(), Cell::Id(7)));
        match &row[1] {
            (key, Cell::Link { text, target }) => {
                assert_eq!(key, "name");
                assert_eq!(text, "Room A");
                assert_eq!(target.route, "entity.reserve_category.edit_form");
                assert_eq!(target.param, "reserve_category");
                assert_eq!(target.id, 7);
            }
            other => panic!("expected name link, got {:?}", other),
        }
    }

    #[test]
    fn row_merges_base_cells_and_tolerates_empty_labels() {
        let builder = ListBuilder::new(RecordKind::Reservation);
        let record = Record { id: 2, label: String::new() };
        let base = vec![
            ("operations".to_string(), Cell::Text("Edit".into())),
            ("name".to_string(), Cell::Text("shadowed".into())),
        ];
        let row = builder.row(&record, &base);

        assert_eq!(row.len(), 3);
        // empty label still produces a link to the edit form
        match &row[1].1 {
            Cell::Link { text, target } => {
                assert!(text.is_empty());
                assert_eq!(target.route, "entity.reserve_reservation.edit_form");
            }
            other => panic!("expected link, got {:?}", other),
        }
        assert_eq!(row[2], ("operations".to_string(), Cell::Text("Edit".into())));
    }
}
