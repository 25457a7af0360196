//! `mfrcat list` — the filtered manufacturer table.

use tabled::Tabled;

use mfrcat_core::{FilterState, Manufacturer, compute_view, convert};

use crate::cli::ListArgs;
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ManufacturerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Vehicle Types")]
    vehicle_types: String,
}

impl From<&Manufacturer> for ManufacturerRow {
    fn from(m: &Manufacturer) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            country: m.country.clone().unwrap_or_default(),
            vehicle_types: m.type_summary(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: &ListArgs, ctx: &Context) -> Result<(), CliError> {
    let spinner = super::fetch_spinner(ctx, "Fetching manufacturers…");
    let result = ctx.client.all_manufacturers().await;
    super::clear_spinner(spinner);

    let list = convert::manufacturers_from_wire(result.map_err(|e| ctx.api_err(e))?);

    let filter = FilterState {
        search_term: args.search.clone().unwrap_or_default(),
        vehicle_type: args.vehicle_type.clone(),
    };
    let view = compute_view(&list, &filter);

    tracing::debug!(
        total = list.len(),
        shown = view.manufacturers.len(),
        "rendering manufacturer list"
    );

    let out = output::render_list(
        ctx.output,
        &view.manufacturers,
        |m| ManufacturerRow::from(m),
        |m| m.id.to_string(),
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}
