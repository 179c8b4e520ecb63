use anyhow::{bail, Result};
use fthis_rewrite::unrewritten_sigils;
use swc_common::{sync::Lrc, FileName, SourceMap, Spanned};
use swc_ecma_ast::EsVersion;
use swc_ecma_parser::{EsSyntax, Syntax};

/// Parse `source` as an ECMAScript module and fail on the first syntax error.
///
/// The error message carries `filename:line:column`.
pub fn check_script(source: &str, filename: &str) -> Result<()> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        source.to_string(),
    );

    let syntax = Syntax::Es(EsSyntax {
        jsx: false,
        ..Default::default()
    });

    let mut recovered = vec![];
    let error = match swc_ecma_parser::parse_file_as_module(
        &source_file,
        syntax,
        EsVersion::latest(),
        None,
        &mut recovered,
    ) {
        Ok(_) if recovered.is_empty() => return Ok(()),
        Ok(_) => recovered.swap_remove(0),
        Err(e) => e,
    };

    let loc = source_map.lookup_char_pos(error.span().lo);
    bail!(
        "{filename}:{}:{}: {}",
        loc.line,
        loc.col_display + 1,
        error.kind().msg()
    )
}

/// Check rewriter output: no shorthand may survive and the text must parse.
pub fn check_output(output: &str, filename: &str) -> Result<()> {
    let sites = unrewritten_sigils(output);
    if let Some(first) = sites.first() {
        bail!(
            "{filename}:{}:{}: ƒ shorthand was not rewritten ({} occurrence(s))",
            first.line,
            first.column,
            sites.len()
        );
    }
    check_script(output, filename)
}
