//! Common command implementation.

use super::Context;
use crate::cli::PairArgs;
use crate::error::Result;
use kinship_domain::PersonHandle;

/// Execute the common command.
pub fn execute_common(args: PairArgs, ctx: &Context) -> Result<String> {
    let a = PersonHandle::from(args.a);
    let b = PersonHandle::from(args.b);

    let records = ctx.engine().common_ancestors(&a, &b)?;
    let labels: Vec<String> = records
        .iter()
        .map(|r| ctx.ancestor_label(&r.ancestor))
        .collect();

    ctx.formatter().format_common_ancestors(&records, &labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::context;
    use crate::config::OutputFormat;

    fn common(ctx: &Context, a: &str, b: &str) -> String {
        execute_common(
            PairArgs {
                a: a.to_string(),
                b: b.to_string(),
            },
            ctx,
        )
        .unwrap()
    }

    #[test]
    fn test_common_quiet_lists_couple() {
        let ctx = context(OutputFormat::Quiet);
        assert_eq!(common(&ctx, "ed", "gil"), "arthur beatrice");
        assert_eq!(common(&ctx, "ed", "colin"), "colin");
    }

    #[test]
    fn test_common_none() {
        let ctx = context(OutputFormat::Table);
        assert!(common(&ctx, "dora", "fay").contains("No common ancestors"));
    }
}
