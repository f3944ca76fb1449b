mod common;

use adsnap::{DateRange, ReportCenter};
use chrono::NaiveDate;
use common::demo_platform;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let center = ReportCenter::builder()
        .transport(demo_platform())
        .poll_interval(std::time::Duration::from_millis(50))
        .build()?;

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    )?;

    // Keyword data is standalone, not part of the composite report.
    let keywords = center.keyword_performance("5501", "90210", range).await?;
    for kw in &keywords {
        println!(
            "{:<20} {:>8} imps  {:>5} clicks  ctr {:.2}%  spend ${:.2}",
            kw.keyword, kw.impressions, kw.clicks, kw.ctr, kw.spend
        );
    }

    Ok(())
}
