use crate::infra::{
    default_evaluator_config, parse_date, parse_property_type, HedonicValuationModel,
    NearbySalesIndex, StaticListingResolver,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use homeanalyzer::analysis::{
    neighborhood_trends, AnalysisReport, AnalyzeRequest, NeighborhoodTrends,
    PropertyAnalysisService, PropertyRecord, PropertyType,
};
use homeanalyzer::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Street address of the listing
    #[arg(long)]
    pub(crate) address: String,
    /// Listing price in whole dollars
    #[arg(long)]
    pub(crate) price: u64,
    /// Interior square footage
    #[arg(long)]
    pub(crate) sqft: u32,
    #[arg(long, default_value_t = 3)]
    pub(crate) bedrooms: u8,
    #[arg(long, default_value_t = 2.0)]
    pub(crate) bathrooms: f64,
    #[arg(long, default_value_t = 1990)]
    pub(crate) year_built: u16,
    /// house, condo, or townhouse
    #[arg(long, default_value = "house", value_parser = parse_property_type)]
    pub(crate) property_type: PropertyType,
    /// Override the analysis date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the analysis date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

type DemoService =
    PropertyAnalysisService<HedonicValuationModel, NearbySalesIndex, StaticListingResolver>;

fn build_service(as_of: NaiveDate) -> DemoService {
    PropertyAnalysisService::new(
        Arc::new(HedonicValuationModel::new(as_of.year())),
        Arc::new(NearbySalesIndex::new(as_of)),
        Arc::new(StaticListingResolver),
        default_evaluator_config(None),
    )
}

pub(crate) fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        address,
        price,
        sqft,
        bedrooms,
        bathrooms,
        year_built,
        property_type,
        as_of,
    } = args;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(as_of);

    let property = PropertyRecord {
        address,
        price,
        sqft,
        bedrooms,
        bathrooms,
        year_built,
        property_type,
    };

    let report = service.analyze(AnalyzeRequest::Property(property), as_of)?;
    render_report(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(as_of);

    let property = PropertyRecord {
        address: "1200 Grand Avenue, Des Moines".to_string(),
        price: 450_000,
        sqft: 1_850,
        bedrooms: 3,
        bathrooms: 2.0,
        year_built: 2005,
        property_type: PropertyType::House,
    };

    println!("== HomeAnalyzer demo ({as_of}) ==");
    println!();

    let report = service.analyze(AnalyzeRequest::Property(property.clone()), as_of)?;
    render_report(&report);

    let trends = neighborhood_trends(&property.address, as_of)
        .map_err(homeanalyzer::analysis::AnalysisServiceError::Input)?;
    render_trends(&trends);

    Ok(())
}

fn render_report(report: &AnalysisReport) {
    let analysis = &report.analysis;
    let assessment = &analysis.assessment;

    println!("Listing: {}", report.property.address);
    println!(
        "  {} | {} sqft | {} bed / {} bath | built {}",
        report.property.property_type.label(),
        report.property.sqft,
        report.property.bedrooms,
        report.property.bathrooms,
        report.property.year_built
    );
    println!();
    println!("Deal score:     {:.1} / 10", assessment.deal_score);
    println!("Assessment:     {}", assessment.pricing_assessment.label());
    println!(
        "Model estimate: ${} (asking ${})",
        analysis.predicted_value, report.property.price
    );
    println!(
        "Price per sqft: ${} asking vs ${} estimated",
        analysis.price_per_sqft, analysis.predicted_price_per_sqft
    );
    println!();
    println!("Value drivers:");
    let drivers = assessment.value_drivers;
    println!("  location      {:>3}%", drivers.location);
    println!("  size          {:>3}%", drivers.size);
    println!("  condition     {:>3}%", drivers.condition);
    println!("  market timing {:>3}%", drivers.market_timing);
    println!();
    println!("Key factors:");
    for factor in &assessment.key_factors {
        println!("  - {factor}");
    }
    println!();
    println!("{}", assessment.explanation);

    if !report.comparables.is_empty() {
        println!();
        println!("Comparable sales:");
        for sale in &report.comparables {
            println!(
                "  {} | ${} | {} sqft | sold {}",
                sale.address, sale.sale_price, sale.sqft, sale.sale_date
            );
        }
    }
}

fn render_trends(trends: &NeighborhoodTrends) {
    println!();
    println!("Neighborhood snapshot: {}", trends.location);
    println!(
        "  average ${} | ${}/sqft | {} days on market | {} sales | {} market",
        trends.average_price,
        trends.price_per_sqft,
        trends.days_on_market,
        trends.total_sales,
        trends.market_status.label()
    );
    for point in &trends.price_trend {
        println!("  {}  ${}", point.month, point.price);
    }
}
