//! Regression check over a directory of recognizer transcripts.
//!
//! Layout: `<dir>/coupons/*.txt` and `<dir>/warranties/*.txt`, each
//! file holding the recognized text for one photo.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;

use benescan_core::{analyze_text, AnalysisResult, AnalysisType};

/// Arguments for the fixtures command.
#[derive(Args)]
pub struct FixturesArgs {
    /// Fixture root containing coupons/ and warranties/
    dir: PathBuf,
}

pub fn run(args: FixturesArgs) -> anyhow::Result<()> {
    let mut checked = 0usize;
    let mut failed = 0usize;

    for (subdir, analysis_type) in [
        ("coupons", AnalysisType::Coupon),
        ("warranties", AnalysisType::Warranty),
    ] {
        let pattern = args.dir.join(subdir).join("*.txt");
        for entry in glob(&pattern.to_string_lossy())? {
            let path = entry?;
            let raw_text = fs::read_to_string(&path)?;
            let result = analyze_text(&raw_text, analysis_type);
            checked += 1;

            match check_fixture(&result, analysis_type) {
                Some(problem) => {
                    failed += 1;
                    println!("{} {}: {}", style("✗").red(), path.display(), problem);
                }
                None => {
                    println!("{} {}", style("✓").green(), path.display());
                }
            }
        }
    }

    if checked == 0 {
        anyhow::bail!("no fixtures found under {}", args.dir.display());
    }

    if failed > 0 {
        anyhow::bail!("{} of {} fixtures failed", failed, checked);
    }

    println!("{} {} fixtures passed", style("✓").green(), checked);
    Ok(())
}

/// A coupon transcript must surface a merchant and an expiration; a
/// warranty needs either a coverage end or a purchase date.
fn check_fixture(result: &AnalysisResult, analysis_type: AnalysisType) -> Option<String> {
    match analysis_type {
        AnalysisType::Coupon => {
            if result.fields.merchant.is_none() {
                return Some("missing merchant".to_string());
            }
            if result.fields.expires_on.is_none() {
                return Some("missing expiration date".to_string());
            }
            None
        }
        AnalysisType::Warranty => {
            if result.fields.coverage_ends_on.is_none() && result.fields.purchase_date.is_none() {
                return Some("missing coverage or purchase date".to_string());
            }
            None
        }
        AnalysisType::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fixture_coupon() {
        let good = analyze_text(
            "Acme Store\n10% off\nValid thru 12/25/2025",
            AnalysisType::Coupon,
        );
        assert!(check_fixture(&good, AnalysisType::Coupon).is_none());

        let bad = analyze_text("Acme Store\nno expiry printed", AnalysisType::Coupon);
        assert_eq!(
            check_fixture(&bad, AnalysisType::Coupon),
            Some("missing expiration date".to_string())
        );
    }

    #[test]
    fn test_check_fixture_warranty() {
        let good = analyze_text(
            "Gadget World\nEspresso machine\nWarranty valid until 01/01/2027",
            AnalysisType::Warranty,
        );
        assert!(check_fixture(&good, AnalysisType::Warranty).is_none());

        let bad = analyze_text("Gadget World\nno dates printed", AnalysisType::Warranty);
        assert_eq!(
            check_fixture(&bad, AnalysisType::Warranty),
            Some("missing coverage or purchase date".to_string())
        );
    }
}
