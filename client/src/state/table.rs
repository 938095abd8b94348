//! Paginated resource table state.
//!
//! Pure transitions only; `ResourceTable` holds one of these in a signal and
//! issues a page fetch whenever [`TableState::query_key`] changes.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageFilter, PageRequest, SortOrder};

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Which modal form is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub page: u32,
    pub size: u32,
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
    pub keyword: String,
    pub total: u64,
    pub loading: bool,
    pub form: Option<FormMode>,
    pub confirm_delete: Option<i64>,
    /// Bumped to force a refetch with unchanged query parameters.
    pub generation: u64,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort_field: None,
            sort_order: SortOrder::Asc,
            keyword: String::new(),
            total: 0,
            loading: false,
            form: None,
            confirm_delete: None,
            generation: 0,
        }
    }
}

/// Everything that changes which rows are shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryKey {
    pub page: u32,
    pub size: u32,
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
    pub keyword: String,
    pub generation: u64,
}

impl TableState {
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.size.max(1));
        u32::try_from(self.total.div_ceil(size).max(1)).unwrap_or(u32::MAX)
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            page: self.page,
            size: self.size,
            sort_field: self.sort_field.clone(),
            sort_order: self.sort_order,
            keyword: self.keyword.clone(),
            generation: self.generation,
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Change the page size and return to the first page.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(1, MAX_PAGE_SIZE);
        self.page = 1;
    }

    /// Apply a new search keyword and return to the first page.
    pub fn search(&mut self, keyword: &str) {
        self.keyword = keyword.trim().to_owned();
        self.page = 1;
    }

    /// Clicking the active column flips the order; a new column sorts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = Some(field.to_owned());
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Record a loaded page. Returns `true` when the current page fell off the
    /// end (e.g. after deleting the last row) and was pulled back.
    pub fn loaded(&mut self, total: u64) -> bool {
        self.loading = false;
        self.total = total;
        let last = self.page_count();
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.form = Some(FormMode::Create);
    }

    pub fn open_edit(&mut self, id: i64) {
        self.form = Some(FormMode::Edit(id));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn ask_delete(&mut self, id: i64) {
        self.confirm_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Close any open modal and refetch the current page.
    pub fn mutated(&mut self) {
        self.form = None;
        self.confirm_delete = None;
        self.generation += 1;
    }

    pub fn page_request<F: PageFilter>(&self, filter: F) -> PageRequest<F> {
        PageRequest {
            page: Some(self.page),
            size: Some(self.size),
            sort_field: self.sort_field.clone(),
            sort_order: self.sort_field.as_ref().map(|_| self.sort_order),
            filter,
        }
    }
}
