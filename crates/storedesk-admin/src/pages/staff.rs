//! Staff list.

use storedesk_core::StoreDeskResult;

use crate::list_view::{ColumnDef, DataTable, Record};
use crate::lookups::StaffState;
use crate::mocks::{PersonName, Staff};
use crate::pages::{DashboardPage, PageRequest};

/// Columns of the staff table.
pub fn staff_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("fullName", "Full Name"),
        ColumnDef::new("phone", "Phone"),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("active", "Active"),
        ColumnDef::new("store", "Store"),
        ColumnDef::new("manager", "Manager"),
    ]
}

/// Builds the table row for a staff member.
pub fn staff_record(staff: &Staff) -> Record {
    Record::new()
        .with("id", staff.id)
        .with("fullName", format!("{} {}", staff.first_name, staff.last_name))
        .with_opt("phone", staff.phone.as_deref())
        .with("email", &staff.email)
        .with("active", StaffState::from_flag(staff.active))
        .with("store", &staff.store)
        .with_opt("manager", staff.manager.as_ref().map(PersonName::full_name))
}

/// The staff list. Not paginated.
#[derive(Debug, Clone)]
pub struct StaffPage {
    table: DataTable,
}

impl StaffPage {
    /// Creates the page over `staffs`.
    pub fn new(staffs: &[Staff]) -> Self {
        let records = staffs.iter().map(staff_record).collect();
        Self {
            table: DataTable::new(staff_columns(), records).row_id("id"),
        }
    }
}

impl DashboardPage for StaffPage {
    fn name(&self) -> &'static str {
        "staff"
    }

    fn title(&self) -> &'static str {
        "Staff"
    }

    fn render(&self, _request: &PageRequest) -> StoreDeskResult<String> {
        Ok(self.table.render_html())
    }
}
