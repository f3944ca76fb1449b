mod common;

use adsnap::{DateRange, ReportCenter, ReportOptions};
use chrono::NaiveDate;
use common::demo_platform;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build the center against the offline demo platform. Swap in
    //    adsnap_http::HttpTransport for real credentials.
    let center = ReportCenter::builder()
        .transport(demo_platform())
        .poll_interval(std::time::Duration::from_millis(50))
        .build()?;

    // 2. One campaign, one month.
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    )?;

    // 3. Fetch all six composite report types concurrently.
    let report = center
        .enhanced_campaign_data("5501", "90210", range, ReportOptions::default())
        .await?;

    if let Some(fences) = &report.geo_fences {
        println!("geo fences: {} rows", fences.len());
    }
    if let Some(conversions) = &report.conversions {
        println!("conversions: {} total", conversions.total_conversions);
    }
    if let Some(domains) = &report.domains {
        println!("top domain: {}", domains[0].domain);
    }
    for warning in &report.warnings {
        println!("warning: {warning}");
    }

    Ok(())
}
