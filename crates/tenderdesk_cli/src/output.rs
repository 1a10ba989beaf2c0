//! Table and JSON rendering for command results.

use anyhow::Result;
use serde_json::json;
use tenderdesk_core::query::format::{
    format_currency, format_file_size, format_fraction_percent, format_millions,
};
use tenderdesk_core::{
    risk_level, CategorySummary, DashboardStats, DocumentRecord, Tender, TenderStatus,
};

use crate::cli::OutputFormat;

pub fn print_tenders(format: OutputFormat, tenders: &[&Tender]) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tenders)?),
        OutputFormat::Table => {
            println!(
                "{:>4}  {:<40}  {:<28}  {:>14}  {:<10}  {:<8}  {:<7}  {:>7}",
                "ID", "TITLE", "CLIENT", "VALUE", "DEADLINE", "STATUS", "RISK", "PROFIT"
            );
            for tender in tenders {
                println!(
                    "{:>4}  {:<40}  {:<28}  {:>14}  {:<10}  {:<8}  {:<7}  {:>7}",
                    tender.id,
                    truncate(&tender.title, 40),
                    truncate(&tender.client, 28),
                    format_currency(tender.value),
                    tender.deadline.to_string(),
                    tender.status.as_str(),
                    risk_level(tender.risk_score).label(),
                    format_fraction_percent(tender.profit_prediction),
                );
            }
            println!("{} tender(s)", tenders.len());
        }
    }
    Ok(())
}

pub fn print_tender_detail(
    format: OutputFormat,
    tender: &Tender,
    documents: &[DocumentRecord],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let body = json!({
                "tender": tender,
                "riskLevel": risk_level(tender.risk_score),
                "statusTag": tender.status.tag(),
                "documents": documents,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Table => {
            let risk = risk_level(tender.risk_score);
            println!("#{} {}", tender.id, tender.title);
            println!("  client:      {}", tender.client);
            println!("  category:    {}", tender.category);
            println!("  status:      {} [{}]", tender.status, tender.status.tag().as_str());
            println!("  value:       {}", format_currency(tender.value));
            println!("  deadline:    {}", tender.deadline);
            println!("  submitted:   {}", tender.submission_date);
            println!(
                "  risk:        {} ({:.2}) [{}]",
                risk.label(),
                tender.risk_score,
                risk.tag().as_str()
            );
            println!(
                "  profit:      {}",
                format_fraction_percent(tender.profit_prediction)
            );
            if !tender.description.is_empty() {
                println!("  description: {}", tender.description);
            }
            println!("  documents:   {}", documents.len());
            for document in documents {
                println!(
                    "    - {} ({}, {})",
                    document.original_name,
                    document.file_type,
                    format_file_size(document.size_bytes)
                );
            }
        }
    }
    Ok(())
}

pub fn print_stats(
    format: OutputFormat,
    stats: &DashboardStats,
    categories: &[CategorySummary],
    statuses: &[(TenderStatus, usize)],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let by_status: serde_json::Map<String, serde_json::Value> = statuses
                .iter()
                .map(|(status, count)| (status.as_str().to_string(), json!(count)))
                .collect();
            let body = json!({
                "stats": stats,
                "categories": categories,
                "statuses": by_status,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Table => {
            println!("total tenders:     {}", stats.total_tenders);
            println!("active tenders:    {}", stats.active_tenders);
            println!("won tenders:       {}", stats.won_tenders);
            println!("won value:         {}", format_millions(stats.total_value));
            println!("win rate:          {:.1}%", stats.win_rate);
            println!("avg profit margin: {:.1}%", stats.avg_profit_margin);
            println!();
            for (status, count) in statuses {
                println!("  {:<8} {count}", status.as_str());
            }
            println!();
            for summary in categories {
                println!(
                    "  {:<16} {:>3}  {}",
                    summary.category,
                    summary.count,
                    format_currency(summary.total_value)
                );
            }
        }
    }
    Ok(())
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut shortened: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    shortened.push_str("...");
    shortened
}
