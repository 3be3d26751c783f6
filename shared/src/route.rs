//! Pages of the app and their URLs.
//!
//! The list page, view mode and edit target travel in the address bar so any
//! view can be bookmarked or shared:
//!
//! - `/?page=2&viewMode=table`
//! - `/add?viewMode=list`
//! - `/edit/1702516122000?page=2&viewMode=table`

use std::fmt;
use thiserror::Error;
use url::form_urlencoded;

use crate::employee::EmployeeId;

/// How the employee list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    List,
    Table,
}

/// What a view mode actually draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One table row per employee with every column
    Rows,
    /// A grid of name/department/position cards
    Cards,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::List, ViewMode::Table];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Table => "table",
        }
    }

    /// Unknown or missing values fall back to [`ViewMode::List`]
    pub fn parse(value: &str) -> ViewMode {
        match value {
            "table" => ViewMode::Table,
            _ => ViewMode::List,
        }
    }

    /// `list` draws the full-width row table and `table` the card grid.
    /// Bookmarks depend on this mapping.
    pub fn layout(self) -> Layout {
        match self {
            ViewMode::List => Layout::Rows,
            ViewMode::Table => Layout::Cards,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page at '{0}'")]
    UnknownPath(String),
    #[error("invalid employee id '{0}'")]
    InvalidId(String),
}

/// A page of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List { page: usize, view_mode: ViewMode },
    Add { view_mode: ViewMode },
    Edit { id: EmployeeId, page: usize, view_mode: ViewMode },
}

impl Default for Route {
    fn default() -> Self {
        Route::List {
            page: 1,
            view_mode: ViewMode::List,
        }
    }
}

/// `page` and `viewMode` from a query string, with defaults for anything
/// missing or malformed
/// Largest page number accepted from a query string
pub const MAX_PAGE: usize = u32::MAX as usize;

fn parse_query(query: &str) -> (usize, ViewMode) {
    let mut page = 1;
    let mut view_mode = ViewMode::List;

    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "page" => {
                page = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|p| *p >= 1)
                    .map_or(1, |p| p.min(MAX_PAGE));
            }
            "viewMode" => view_mode = ViewMode::parse(&value),
            _ => {}
        }
    }

    (page, view_mode)
}

impl Route {
    /// Resolve a location's path and query string (with or without `?`)
    pub fn parse(path: &str, query: &str) -> Result<Route, RouteError> {
        let (page, view_mode) = parse_query(query);
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::List { page, view_mode }),
            ["add"] => Ok(Route::Add { view_mode }),
            ["edit", id] => {
                let id = id.parse::<EmployeeId>().map_err(|_| RouteError::InvalidId(id.to_string()))?;
                Ok(Route::Edit { id, page, view_mode })
            }
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    /// Like [`Route::parse`], but anything unrecognized opens the list
    pub fn parse_or_default(path: &str, query: &str) -> Route {
        Route::parse(path, query).unwrap_or_else(|e| {
            log::warn!("{}; showing the employee list", e);
            let (page, view_mode) = parse_query(query);
            Route::List { page, view_mode }
        })
    }

    pub fn view_mode(&self) -> ViewMode {
        match self {
            Route::List { view_mode, .. } | Route::Add { view_mode } | Route::Edit { view_mode, .. } => *view_mode,
        }
    }

    /// Page of the list this route was opened from
    pub fn page(&self) -> usize {
        match self {
            Route::List { page, .. } | Route::Edit { page, .. } => *page,
            Route::Add { .. } => 1,
        }
    }

    /// The list route to go back to when leaving a form
    pub fn back_to_list(&self) -> Route {
        Route::List {
            page: self.page(),
            view_mode: self.view_mode(),
        }
    }

    pub fn to_href(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let path = match self {
            Route::List { page, view_mode } => {
                query.append_pair("page", &page.to_string());
                query.append_pair("viewMode", view_mode.as_str());
                "/".to_string()
            }
            Route::Add { view_mode } => {
                query.append_pair("viewMode", view_mode.as_str());
                "/add".to_string()
            }
            Route::Edit { id, page, view_mode } => {
                query.append_pair("page", &page.to_string());
                query.append_pair("viewMode", view_mode.as_str());
                format!("/edit/{}", id)
            }
        };
        format!("{}?{}", path, query.finish())
    }
}
