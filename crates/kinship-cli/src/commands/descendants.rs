//! Descendants command implementation.

use super::Context;
use crate::cli::WindowArgs;
use crate::error::Result;
use crate::output::PersonRow;
use kinship_domain::PersonHandle;

/// Execute the descendants command.
pub fn execute_descendants(args: WindowArgs, ctx: &Context) -> Result<String> {
    let person = PersonHandle::from(args.person);
    let found = ctx
        .engine()
        .descendant_generations(&person, args.within.unwrap_or(u32::MAX))?;

    let rows: Vec<PersonRow> = found
        .iter()
        .map(|(handle, generation)| ctx.row(handle, Some(*generation)))
        .collect();

    ctx.formatter().format_people(&rows)
}
