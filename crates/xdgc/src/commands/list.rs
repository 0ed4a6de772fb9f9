use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use xdgc_core::{DirectoryCategory, Environment, Resolution, Resolver, XdgError};

use crate::ListFormat;
use crate::report::{self, ListEntryJson, Reporter};

pub fn run<E: Environment>(
    resolver: &Resolver<E>,
    reporter: &Reporter,
    format: ListFormat,
) -> Result<()> {
    let results: Vec<(DirectoryCategory, Result<Resolution, XdgError>)> = DirectoryCategory::ALL
        .into_iter()
        .map(|c| (c, resolver.resolve_traced(c)))
        .collect();

    for resolution in results.iter().filter_map(|(_, r)| r.as_ref().ok()) {
        reporter.trace(resolution);
    }

    match format {
        ListFormat::Table => {
            print_table(&results);
            Ok(())
        }
        ListFormat::Json => {
            let entries: Vec<ListEntryJson> = results
                .iter()
                .map(|(category, result)| ListEntryJson {
                    category: category.name(),
                    variable: category.override_var(),
                    path: result
                        .as_ref()
                        .ok()
                        .map(|r| r.path.to_string_lossy().into_owned()),
                    error: result.as_ref().err().map(ToString::to_string),
                })
                .collect();
            report::print_json(&entries)
        }
    }
}

fn print_table(results: &[(DirectoryCategory, Result<Resolution, XdgError>)]) {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Variable", "Path"]);

    for (category, result) in results {
        let path_cell = match result {
            Ok(resolution) => Cell::new(resolution.path.display()),
            Err(e) => Cell::new(format!("({e})")).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(category.name()),
            Cell::new(category.override_var()),
            path_cell,
        ]);
    }

    println!("{table}");

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        println!(
            "{}",
            format!("{failed} of {} unresolved", results.len()).dimmed()
        );
    }
}
