use api::PersonRow;
use maud::{html, Markup};

/// Number of columns in the saints table; message rows span all of them.
pub const TABLE_COLUMNS: u8 = 7;

pub const TABLE_LOADING: &str = "Loading...";
pub const TABLE_EMPTY: &str = "No saints found matching the current filters.";
pub const TABLE_ERROR: &str = "An error occurred while loading data.";

/// A single full-width row carrying a status message.
pub fn table_message(message: &str) -> Markup {
    html! {
        tr {
            td colspan=(TABLE_COLUMNS) class="text-center" { (message) }
        }
    }
}

/// One row per person: name, hierarchy from cell up to region, active badge.
pub fn person_rows(people: &[PersonRow]) -> Markup {
    html! {
        @for person in people {
            tr {
                td { (person.full_name()) }
                td { (person.cell) }
                td { (person.team) }
                td { (person.department) }
                td { (person.direction) }
                td { (person.region) }
                td {
                    @if person.is_active {
                        span.badge.badge-success { "Active" }
                    } @else {
                        span.badge.badge-danger { "Inactive" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(first: &str, active: bool) -> PersonRow {
        PersonRow {
            person_id: Some(1),
            first_name: first.to_string(),
            last_name: "Boateng".to_string(),
            cell: "C1".to_string(),
            team: "T1".to_string(),
            department: "Ushers".to_string(),
            direction: "East".to_string(),
            region: "Accra".to_string(),
            is_active: active,
            mobile_number: None,
            country: None,
        }
    }

    #[test]
    fn test_message_row_spans_table() {
        assert_eq!(
            table_message(TABLE_EMPTY).into_string(),
            r#"<tr><td colspan="7" class="text-center">No saints found matching the current filters.</td></tr>"#
        );
    }

    #[test]
    fn test_rows_in_column_order() {
        let html = person_rows(&[row("Yaw", true)]).into_string();
        assert_eq!(
            html,
            concat!(
                "<tr><td>Yaw Boateng</td><td>C1</td><td>T1</td><td>Ushers</td>",
                "<td>East</td><td>Accra</td>",
                r#"<td><span class="badge badge-success">Active</span></td></tr>"#
            )
        );
    }

    #[test]
    fn test_inactive_badge() {
        let html = person_rows(&[row("Efua", false)]).into_string();
        assert!(html.contains(r#"<span class="badge badge-danger">Inactive</span>"#));
    }

    #[test]
    fn test_one_row_per_person() {
        let html = person_rows(&[row("A", true), row("B", false)]).into_string();
        assert_eq!(html.matches("<tr>").count(), 2);
    }
}
