use chrono::NaiveDate;
use swatch_catalog::{TemplateData, build_template_data};
use swatch_core::ComponentRecord;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `swatch nav`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let extraction = ctx.extract()?;
    let data = template_data(ctx, &extraction.components, today());
    output(&data, flags.format)
}

/// Build date in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Navigation over every configured category, in configured order.
pub fn template_data(
    ctx: &AppContext,
    components: &[ComponentRecord],
    date: NaiveDate,
) -> TemplateData {
    build_template_data(
        components,
        &ctx.config.categories(),
        &ctx.config.pages,
        date,
    )
}
