use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::path::Path;

use custdedup_core::modules::seed::{self, SeedSummary};
use custdedup_core::CustomerService;
use custdedup_types::{DeduplicationResult, SourceComparisonResult, SourceSystem};

fn warn_if_ephemeral(service: &CustomerService) {
    if service.is_ephemeral() {
        println!(
            "{}",
            "DATABASE_URL is not set: using an empty in-memory store for this run.".yellow()
        );
    }
}

pub async fn handle_seed(service: &CustomerService, file: &Path, append: bool) -> Result<()> {
    warn_if_ephemeral(service);

    let upload = seed::load_seed_file(file)
        .with_context(|| format!("Failed to read seed file {}", file.display()))?;
    println!("Loading {} customer records from {}", upload.customers.len(), file.display());

    let summary = seed::seed(service, upload, !append).await.context("Seeding failed")?;
    print_seed_summary(&summary);
    Ok(())
}

fn print_seed_summary(summary: &SeedSummary) {
    if summary.cleared > 0 {
        println!("Cleared {} existing records", summary.cleared);
    }
    println!("{} Loaded {} customer records", "✓".green(), summary.loaded);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Source", "Records"]);
    for (source, count) in &summary.per_source {
        table.add_row(vec![Cell::new(source.label()), Cell::new(count)]);
    }
    println!("{table}");

    println!(
        "\nExpected analysis: {} total, {} unique, {} duplicates",
        summary.dedup.total_records, summary.dedup.unique_customers, summary.dedup.duplicates_found
    );
    println!("Unique customer ids: {}", format_ids(&summary.dedup.unique_customer_ids));
}

pub async fn handle_analyze(service: &CustomerService, json: bool) -> Result<()> {
    let result = service.deduplicate_customers().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    warn_if_ephemeral(service);
    print_analysis(&result);
    Ok(())
}

fn print_analysis(result: &DeduplicationResult) {
    println!("{}", "Deduplication Analysis".cyan().bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Total records"), Cell::new(result.total_records)]);
    table.add_row(vec![Cell::new("Unique customers"), Cell::new(result.unique_customers)]);
    let duplicates = if result.duplicates_found > 0 {
        Cell::new(result.duplicates_found).fg(Color::Yellow)
    } else {
        Cell::new(result.duplicates_found).fg(Color::Green)
    };
    table.add_row(vec![Cell::new("Duplicates found"), duplicates]);
    println!("{table}");

    println!("\nUnique customer ids: {}", format_ids(&result.unique_customer_ids));
}

pub async fn handle_compare(service: &CustomerService, json: bool) -> Result<()> {
    let result = service.compare_sources().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    warn_if_ephemeral(service);
    print_comparison(&result);
    Ok(())
}

fn print_comparison(result: &SourceComparisonResult) {
    println!("{}", "Source Comparison".cyan().bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Source", "Distinct ids", "Exclusive ids"]);
    for source in SourceSystem::ALL {
        table.add_row(comparison_row(result, source));
    }
    println!("{table}");

    println!("\nIn all sources: {}", format_ids(&result.in_all_sources));
}

fn comparison_row(result: &SourceComparisonResult, source: SourceSystem) -> Vec<Cell> {
    vec![
        Cell::new(source.label()),
        Cell::new(result.count_for(source)),
        Cell::new(format_ids(result.only_in(source))),
    ]
}

pub async fn handle_clear(service: &CustomerService) -> Result<()> {
    let deleted = service.clear_all_customers().await?;
    println!("{} Deleted {} customer records", "✓".green(), deleted);
    Ok(())
}

fn format_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::test_helpers::{sample_upload, test_app_state};

    #[test]
    fn test_format_ids() {
        assert_eq!(format_ids(&[]), "-");
        assert_eq!(format_ids(&[101, 104]), "101, 104");
    }

    #[test]
    fn test_comparison_rows_follow_source_order() {
        let result = SourceComparisonResult {
            only_in_hubspot: vec![104],
            hubspot_count: 3,
            ..SourceComparisonResult::default()
        };

        let row = comparison_row(&result, SourceSystem::Hubspot);
        assert_eq!(row.len(), 3);
        assert_eq!(row[0].content(), "HubSpot");
        assert_eq!(row[1].content(), "3");
        assert_eq!(row[2].content(), "104");

        let empty = comparison_row(&result, SourceSystem::Internal);
        assert_eq!(empty[0].content(), "Internal");
        assert_eq!(empty[2].content(), "-");
    }

    #[test]
    fn test_memory_store_is_ephemeral() {
        assert!(test_app_state().service().is_ephemeral());
    }

    #[tokio::test]
    async fn test_seed_then_analyze_and_clear() {
        let state = test_app_state();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_upload().to_string().as_bytes()).unwrap();

        handle_seed(state.service(), file.path(), false).await.unwrap();
        let result = state.service().deduplicate_customers().await.unwrap();
        assert_eq!(result.total_records, 9);

        handle_analyze(state.service(), true).await.unwrap();
        handle_compare(state.service(), false).await.unwrap();

        handle_clear(state.service()).await.unwrap();
        assert!(state.service().list_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let state = test_app_state();
        let err = handle_seed(state.service(), Path::new("/nonexistent/seed.json"), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
