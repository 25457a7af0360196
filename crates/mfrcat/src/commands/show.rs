//! `mfrcat show <id>` — one manufacturer's extended detail record.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use mfrcat_core::ManufacturerDetail;

use crate::cli::ShowArgs;
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: &ShowArgs, ctx: &Context) -> Result<(), CliError> {
    let spinner = super::fetch_spinner(ctx, "Fetching manufacturer details…");
    let result = ctx.client.manufacturer_details(args.id).await;
    super::clear_spinner(spinner);

    let detail = ManufacturerDetail::from(result.map_err(|e| ctx.api_err(e))?);
    let use_color = output::should_color(ctx.color);

    let out = output::render_single(
        ctx.output,
        &detail,
        |d| render_detail(d, use_color),
        |d| d.name.clone(),
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}

// ── Detail formatting ───────────────────────────────────────────────

fn render_detail(detail: &ManufacturerDetail, use_color: bool) -> String {
    let mut out = String::new();

    let name = if detail.name.is_empty() {
        "(unnamed manufacturer)"
    } else {
        detail.name.as_str()
    };
    if use_color {
        let _ = writeln!(out, "{}", name.bold());
    } else {
        let _ = writeln!(out, "{name}");
    }

    push_field(&mut out, "Registered Name", detail.registered_name.as_deref());

    let head = match (&detail.current_head, &detail.current_head_title) {
        (Some(head), Some(title)) => Some(format!("{head} ({title})")),
        (Some(head), None) => Some(head.clone()),
        (None, _) => None,
    };
    push_field(&mut out, "Current Head", head.as_deref());

    push_field(&mut out, "Address", detail.address.as_deref());

    let location = detail.location_line();
    push_field(
        &mut out,
        "Location",
        (!location.is_empty()).then_some(location.as_str()),
    );

    // Drop the trailing newline so print_output adds exactly one.
    out.truncate(out.trim_end().len());
    out
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "  {label:<16} {value}");
    }
}
