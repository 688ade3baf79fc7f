use serde::Serialize;
use swatch_core::ComponentRecord;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRow {
    pub category: String,
    pub group: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub filename: String,
}

impl From<&ComponentRecord> for ComponentRow {
    fn from(component: &ComponentRecord) -> Self {
        Self {
            category: component.category.clone(),
            group: component.group.clone(),
            title: component.title.clone(),
            kind: component.kind.as_str().to_string(),
            filename: component.filename(),
        }
    }
}

/// Handle `swatch list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let extraction = ctx.extract()?;
    let rows = rows(&extraction.components, args.category.as_deref());
    output(&rows, flags.format)
}

/// One row per component, optionally restricted to a category.
pub fn rows(components: &[ComponentRecord], category: Option<&str>) -> Vec<ComponentRow> {
    components
        .iter()
        .filter(|component| category.is_none_or(|category| component.category == category))
        .map(ComponentRow::from)
        .collect()
}
