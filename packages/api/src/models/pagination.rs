use serde::{Deserialize, Serialize};

/// Pagination descriptor attached to a filter response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    /// Null when there is no previous page.
    #[serde(default)]
    pub prev_num: Option<u32>,
    /// Null when there is no next page.
    #[serde(default)]
    pub next_num: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl Pagination {
    /// Label shown in `.pagination-info`.
    pub fn label(&self) -> String {
        format!("Showing {} of {} pages", self.page, self.pages)
    }

    /// Page the "previous" control should link to, if it should be enabled.
    pub fn prev_target(&self) -> Option<u32> {
        self.has_prev.then_some(self.prev_num).flatten()
    }

    /// Page the "next" control should link to, if it should be enabled.
    pub fn next_target(&self) -> Option<u32> {
        self.has_next.then_some(self.next_num).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(has_prev: bool, has_next: bool) -> Pagination {
        Pagination {
            page: 2,
            pages: 3,
            has_prev,
            has_next,
            prev_num: has_prev.then_some(1),
            next_num: has_next.then_some(3),
            per_page: None,
            total: None,
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(page(true, true).label(), "Showing 2 of 3 pages");
    }

    #[test]
    fn test_targets_follow_flags() {
        assert_eq!(page(true, false).prev_target(), Some(1));
        assert_eq!(page(true, false).next_target(), None);
        assert_eq!(page(false, true).prev_target(), None);
        assert_eq!(page(false, true).next_target(), Some(3));
    }

    #[test]
    fn test_flag_without_number_is_disabled() {
        let mut p = page(false, false);
        p.has_next = true;
        assert_eq!(p.next_target(), None);
    }
}
