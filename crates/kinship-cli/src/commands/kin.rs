//! Kin command implementation.

use super::Context;
use crate::cli::PersonArgs;
use crate::error::Result;
use crate::output::PersonRow;
use kinship_domain::PersonHandle;

/// Execute the kin command.
pub fn execute_kin(args: PersonArgs, ctx: &Context) -> Result<String> {
    let person = PersonHandle::from(args.person);
    let kin = ctx.engine().people_sharing_ancestor_with(&person)?;

    let rows: Vec<PersonRow> = kin.iter().map(|handle| ctx.row(handle, None)).collect();
    ctx.formatter().format_people(&rows)
}
