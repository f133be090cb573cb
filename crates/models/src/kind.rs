use crate::record::RecordId;

/// The two administrative record kinds. Records are structurally identical;
/// the kinds differ in display name, routes, and storage location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Category,
    Reservation,
}

impl RecordKind {
    /// User-facing type name used in status messages and column headers.
    pub fn display_name(self) -> &'static str {
        match self {
            RecordKind::Category => "Reservation Category",
            RecordKind::Reservation => "Reservation",
        }
    }

    /// Route name of the edit form for this kind.
    pub fn edit_route(self) -> &'static str {
        match self {
            RecordKind::Category => "entity.reserve_category.edit_form",
            RecordKind::Reservation => "entity.reserve_reservation.edit_form",
        }
    }

    /// Route name of the canonical (view) page for this kind.
    pub fn canonical_route(self) -> &'static str {
        match self {
            RecordKind::Category => "entity.reserve_category.canonical",
            RecordKind::Reservation => "entity.reserve_reservation.canonical",
        }
    }

    /// Route parameter carrying the record id.
    pub fn route_param(self) -> &'static str {
        match self {
            RecordKind::Category => "reserve_category",
            RecordKind::Reservation => "reserve_reservation",
        }
    }

    /// Edit-form target for one record.
    pub fn edit_target(self, id: RecordId) -> RouteTarget {
        RouteTarget { route: self.edit_route(), param: self.route_param(), id }
    }

    /// Canonical (view) target for one record.
    pub fn canonical_target(self, id: RecordId) -> RouteTarget {
        RouteTarget { route: self.canonical_route(), param: self.route_param(), id }
    }
}

/// A named route plus the id parameter addressing one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTarget {
    pub route: &'static str,
    pub param: &'static str,
    pub id: RecordId,
}
