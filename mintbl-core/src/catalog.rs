//! The output-name catalog and the classification rules over it.
//!
//! Matching happens in two explicit passes: exact file names first, then
//! suffix rules. A name that satisfies both resolves to the exact entry.

use std::path::Path;

use crate::{
    ClassifyError, DirectiveDialect, GeneratorInvocation, IntrinsicArch, OutputKind, Result,
};

/// Suffix rules, evaluated only after every exact rule has failed to match.
const SUFFIX_RULES: &[(&str, OutputKind)] = &[(
    "RISCVTargetParserDef.inc",
    OutputKind::RiscvTargetParserDef,
)];

/// Every output kind in catalog order (exact kinds first, suffix kinds last).
pub fn catalog() -> Vec<OutputKind> {
    let mut kinds = vec![
        OutputKind::Attributes,
        OutputKind::AttributesCompatFunc,
        OutputKind::IntrinsicEnums,
        OutputKind::IntrinsicImpl,
    ];
    kinds.extend(IntrinsicArch::ALL.into_iter().map(OutputKind::ArchIntrinsics));
    for dialect in DirectiveDialect::ALL {
        kinds.push(OutputKind::DirectiveDecl(dialect));
        kinds.push(OutputKind::DirectiveImpl(dialect));
    }
    kinds.push(OutputKind::ValueTypes);
    kinds.extend(SUFFIX_RULES.iter().map(|(_, kind)| *kind));
    kinds
}

fn exact_rules() -> Vec<(&'static str, OutputKind)> {
    catalog()
        .into_iter()
        .filter_map(|kind| kind.file_name().map(|name| (name, kind)))
        .collect()
}

/// Strip directory components from an output path.
///
/// Returns `None` when the path has no final component (`""`, `".."`, `"/"`).
pub fn base_name(output: &str) -> Option<&str> {
    Path::new(output).file_name().and_then(|name| name.to_str())
}

/// Identify which output kind a requested output name refers to.
pub fn identify(output: &str) -> Result<OutputKind> {
    let name = base_name(output).ok_or_else(|| ClassifyError::unrecognized(output))?;
    match_rules(name, &exact_rules(), SUFFIX_RULES)
        .ok_or_else(|| ClassifyError::unrecognized(name))
}

/// Classify an output name into the generator invocation that produces it.
///
/// # Errors
///
/// Returns [`ClassifyError::UnrecognizedOutput`] when the base name matches
/// no catalog entry.
pub fn classify(output: &str) -> Result<GeneratorInvocation> {
    identify(output).map(|kind| kind.invocation())
}

fn match_rules(
    name: &str,
    exact: &[(&str, OutputKind)],
    suffix: &[(&str, OutputKind)],
) -> Option<OutputKind> {
    exact
        .iter()
        .find(|(file, _)| *file == name)
        .or_else(|| suffix.iter().find(|(tail, _)| name.ends_with(tail)))
        .map(|(_, kind)| *kind)
}
