use crate::catalog;
use crate::cli::{Cli, Commands};
use crate::domain::models::{Category, CategoryCount, RecordView};
use crate::queries::contextual_query;
use crate::services::output::{print_rows, print_value};
use crate::services::resolver::search_plan;
use crate::services::storage::image_file_name;

pub fn handle_catalog_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Commands::List {
            category,
            unofficial,
        } => {
            let records = catalog::filter(category.map(Category::from), *unofficial);
            print_rows(cli.json, &records, |r| {
                let marker = if r.official { "" } else { "\t(unofficial)" };
                format!("{}\t{}\t{}{}", r.code, r.message, r.category, marker)
            })?;
        }
        Commands::Show { code } => {
            let record = catalog::require(*code)?;
            let view = RecordView {
                record: *record,
                contextual_query: contextual_query(record.code),
                image_file: image_file_name(record.code),
            };
            print_value(cli.json, view, |v| {
                let mut lines = vec![
                    format!("code: {}", v.record.code),
                    format!("message: {}", v.record.message),
                    format!("category: {}", v.record.category),
                    format!("official: {}", v.record.official),
                    format!("description: {}", v.record.description),
                    format!("image: {}", v.image_file),
                ];
                if let Some(q) = v.contextual_query {
                    lines.push(format!("contextual query: {}", q));
                }
                lines.join("\n")
            })?;
        }
        Commands::Query { code } => {
            let record = catalog::require(*code)?;
            let plan = search_plan(record.code, record.message);
            print_rows(cli.json, &plan, |p| {
                format!("{}\t{}", p.tier.as_str(), p.query)
            })?;
        }
        Commands::Categories => {
            let counts: Vec<CategoryCount> = Category::ALL
                .iter()
                .map(|c| {
                    let records = catalog::filter(Some(*c), false);
                    CategoryCount {
                        category: *c,
                        label: c.label(),
                        count: records.len(),
                        unofficial: records.iter().filter(|r| !r.official).count(),
                    }
                })
                .collect();
            print_rows(cli.json, &counts, |c| {
                format!("{}\t{}\t{} unofficial", c.label, c.count, c.unofficial)
            })?;
        }
        Commands::Fetch(_) => return Ok(false),
    }

    Ok(true)
}
