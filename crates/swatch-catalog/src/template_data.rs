//! Global data shared by every rendered page.

use chrono::NaiveDate;
use serde::Serialize;
use swatch_config::PageConfig;
use swatch_core::ComponentRecord;
use swatch_core::slug::page_link;

use crate::nav::{NavEntry, build_nav};

/// Display format of the build date, e.g. `07 March 2025`.
pub const DATE_FORMAT: &str = "%d %B %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateData {
    pub nav: Vec<CategoryNav>,
    pub pages: Vec<PageLink>,
    pub global: GlobalData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNav {
    pub category: String,
    pub items: Vec<NavEntry>,
}

/// Link to a static page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub title: String,
    pub link: String,
}

impl PageLink {
    #[must_use]
    pub fn for_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
            link: page_link(title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalData {
    pub date: String,
}

/// Assemble navigation for each category in the given order, links to
/// every non-index page, and the formatted build date.
#[must_use]
pub fn build_template_data(
    components: &[ComponentRecord],
    categories: &[&str],
    pages: &[PageConfig],
    date: NaiveDate,
) -> TemplateData {
    let nav = categories
        .iter()
        .map(|category| CategoryNav {
            category: (*category).to_string(),
            items: build_nav(components, category),
        })
        .collect();

    let pages = pages
        .iter()
        .filter(|page| !page.index)
        .map(|page| PageLink::for_title(&page.title))
        .collect();

    TemplateData {
        nav,
        pages,
        global: GlobalData {
            date: date.format(DATE_FORMAT).to_string(),
        },
    }
}
