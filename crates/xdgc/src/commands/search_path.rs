use anyhow::Result;
use xdgc_core::{Environment, Resolver, SearchPath};

use crate::Format;
use crate::report::{self, Reporter, SearchPathJson};

pub fn run<E: Environment>(
    resolver: &Resolver<E>,
    reporter: &Reporter,
    kind: SearchPath,
    format: Format,
) -> Result<()> {
    let value = resolver.search_path(kind);
    reporter.trace_search_path(kind, resolver.env().non_empty(kind.var()).is_some());

    match format {
        Format::Text => report::print_raw(&value),
        Format::Json => report::print_json(&SearchPathJson {
            variable: kind.var(),
            value: value.to_string_lossy().into_owned(),
        }),
    }
}
