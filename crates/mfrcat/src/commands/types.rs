//! `mfrcat types` — distinct vehicle types across the catalog.

use tabled::Tabled;

use mfrcat_core::{convert, type_options};

use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Vehicle Type")]
    name: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context) -> Result<(), CliError> {
    let spinner = super::fetch_spinner(ctx, "Fetching manufacturers…");
    let result = ctx.client.all_manufacturers().await;
    super::clear_spinner(spinner);

    let list = convert::manufacturers_from_wire(result.map_err(|e| ctx.api_err(e))?);
    let options = type_options(&list);

    let out = output::render_list(
        ctx.output,
        &options,
        |name| TypeRow { name: name.clone() },
        String::clone,
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}
