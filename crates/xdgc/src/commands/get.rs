use anyhow::Result;
use xdgc_core::{DirectoryCategory, Environment, Resolver};

use crate::Format;
use crate::report::{self, DirJson, Reporter};

pub fn run<E: Environment>(
    resolver: &Resolver<E>,
    reporter: &Reporter,
    category: DirectoryCategory,
    format: Format,
) -> Result<()> {
    let resolution = resolver.resolve_traced(category)?;
    reporter.trace(&resolution);

    match format {
        Format::Text => report::print_raw(resolution.path.as_os_str()),
        Format::Json => report::print_json(&DirJson {
            category: category.name(),
            variable: category.override_var(),
            path: resolution.path.to_string_lossy().into_owned(),
        }),
    }
}
