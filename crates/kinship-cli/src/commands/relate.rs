//! Relate command implementation.

use super::Context;
use crate::cli::PairArgs;
use crate::error::Result;
use crate::output::RelationshipReport;
use kinship_domain::PersonHandle;

/// Execute the relate command.
pub fn execute_relate(args: PairArgs, ctx: &Context) -> Result<String> {
    let a = PersonHandle::from(args.a);
    let b = PersonHandle::from(args.b);

    let relationship = ctx.engine().relationship(&a, &b)?;

    // phrases describe B, so B's gender picks the word
    let gender = ctx.person(&b)?.gender;
    let mut phrases: Vec<String> = relationship
        .descriptors()
        .iter()
        .map(|d| ctx.phrases().format(d, gender))
        .collect();
    phrases.dedup();

    let ancestor_labels = relationship
        .common_ancestors
        .iter()
        .map(|r| ctx.ancestor_label(&r.ancestor))
        .collect();

    let report = RelationshipReport {
        a: ctx.row(&a, None),
        b: ctx.row(&b, None),
        phrases,
        relationship,
        ancestor_labels,
    };
    ctx.formatter().format_relationship(&report)
}
