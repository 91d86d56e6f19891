//! Ancestors command implementation.

use super::Context;
use crate::cli::WindowArgs;
use crate::error::Result;
use crate::output::PersonRow;
use kinship_domain::PersonHandle;
use tracing::warn;

/// Execute the ancestors command.
pub fn execute_ancestors(args: WindowArgs, ctx: &Context) -> Result<String> {
    let person = PersonHandle::from(args.person);
    let engine = ctx.engine();
    let map = engine.ancestor_map(&person)?;

    let rows: Vec<PersonRow> = map
        .within(args.within.unwrap_or(u32::MAX))
        .map(|(handle, entry)| ctx.row(handle, Some(entry.generation)))
        .collect();

    let output = ctx.formatter().format_people(&rows)?;
    match (args.within, engine.config().max_generations) {
        (Some(within), Some(cap)) if within > cap => {
            warn!("Ancestor window {} clamped to max_generations {}", within, cap);
            let message = format!(
                "--within {} exceeds the configured max_generations = {}",
                within, cap
            );
            Ok(ctx.formatter().with_warning(output, &message))
        }
        _ => Ok(output),
    }
}
