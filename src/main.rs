use analytics::metrics::{
    acquisition_cost, churn_rate, lifetime_value, magic_number, payback_period, runway_months,
};
use analytics::classify::{classify_magic_number, classify_payback};
use analytics::retail::{price_floors, price_sweep, retail_economics};
use analytics::{HealthEngine, HealthInputs, RetailInputs};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, RetailSettings};
use core_types::MonthlyAmount;
use forecast::{Scenario, ScenarioReport, compare_scenarios, project_cashflow, runway_status};
use rust_decimal::Decimal;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the unit-economics toolkit.
fn main() -> Result<()> {
    init_tracing()?;

    // Environment overrides for the config file may live in a .env file.
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    // Parse command-line arguments
    let cli = Cli::parse();
    let json = cli.json;

    // Execute the appropriate command
    match cli.command {
        Commands::Ltv(args) => handle_ltv(args, json),
        Commands::Cac(args) => handle_cac(args, json),
        Commands::Payback(args) => handle_payback(args, json),
        Commands::MagicNumber(args) => handle_magic_number(args, json),
        Commands::Churn(args) => handle_churn(args, json),
        Commands::Runway(args) => handle_runway(args, json),
        Commands::Health(args) => handle_health(args, json),
        Commands::Project(args) => handle_project(args, json),
        Commands::Scenarios(args) => handle_scenarios(args, json),
        Commands::Retail(args) => handle_retail(args, json),
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install tracing subscriber")?;
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Unit economics, runway and cash-flow calculators for early-stage companies.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Customer lifetime value: ARPU * gross margin / monthly churn.
    Ltv(LtvArgs),
    /// Customer acquisition cost: S&M spend / new customers.
    Cac(CacArgs),
    /// Months needed to earn back the CAC.
    Payback(PaybackArgs),
    /// Net new ARR / prior-quarter S&M spend.
    MagicNumber(MagicNumberArgs),
    /// Monthly churn percentage from customer counts.
    Churn(ChurnArgs),
    /// Months of runway at the current burn.
    Runway(RunwayArgs),
    /// Full unit-economics health check.
    Health(HealthArgs),
    /// Month-by-month cash-flow projection.
    Project(ProjectArgs),
    /// Compare the scenarios from the config file and write a JSON report.
    Scenarios(ScenariosArgs),
    /// Per-order retail economics for the product in the config file.
    Retail(RetailArgs),
}

#[derive(Parser)]
struct LtvArgs {
    /// Average revenue per user per month.
    #[arg(long)]
    arpu: Decimal,
    /// Gross margin as a fraction (0.75 = 75%).
    #[arg(long)]
    gross_margin: Decimal,
    /// Monthly churn as a fraction (0.04 = 4%).
    #[arg(long)]
    churn: Decimal,
}

#[derive(Parser)]
struct CacArgs {
    /// Sales & marketing spend for the period.
    #[arg(long)]
    spend: Decimal,
    #[arg(long)]
    new_customers: u64,
}

#[derive(Parser)]
struct PaybackArgs {
    #[arg(long)]
    cac: Decimal,
    #[arg(long)]
    arpu: Decimal,
    #[arg(long)]
    gross_margin: Decimal,
}

#[derive(Parser)]
struct MagicNumberArgs {
    /// Net new ARR added this quarter.
    #[arg(long, allow_hyphen_values = true)]
    net_new_arr: Decimal,
    /// S&M spend in the prior quarter.
    #[arg(long)]
    prior_spend: Decimal,
}

#[derive(Parser)]
struct ChurnArgs {
    /// Customers at the start of the period.
    #[arg(long)]
    start: u64,
    /// Customers at the end of the period.
    #[arg(long)]
    end: u64,
    /// Customers acquired during the period.
    #[arg(long = "new")]
    new_customers: u64,
}

#[derive(Parser)]
struct RunwayArgs {
    /// Cash in the bank.
    #[arg(long)]
    cash: Decimal,
    /// Monthly burn (expenses minus revenue); zero or negative means profitable.
    #[arg(long, allow_hyphen_values = true)]
    burn: Decimal,
}

#[derive(Parser)]
struct HealthArgs {
    #[arg(long)]
    arpu: Decimal,
    #[arg(long)]
    gross_margin: Decimal,
    #[arg(long)]
    churn: Decimal,
    /// Sales & marketing spend for the acquisition period.
    #[arg(long)]
    spend: Decimal,
    #[arg(long)]
    new_customers: u64,
}

#[derive(Parser)]
struct ProjectArgs {
    #[arg(long, allow_hyphen_values = true)]
    starting_cash: Decimal,
    /// One value for a constant amount, or a comma-separated value per month.
    #[arg(long, value_delimiter = ',', required = true)]
    revenue: Vec<Decimal>,
    /// One value for a constant amount, or a comma-separated value per month.
    #[arg(long, value_delimiter = ',', required = true)]
    expenses: Vec<Decimal>,
    #[arg(long, default_value_t = 12)]
    months: usize,
}

#[derive(Parser)]
struct ScenariosArgs {
    /// Configuration file (defaults to unit-economics.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the JSON scenario report.
    #[arg(long, default_value = "scenario_report.json")]
    output: PathBuf,
}

#[derive(Parser)]
struct RetailArgs {
    /// Configuration file (defaults to unit-economics.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_ltv(args: LtvArgs, json: bool) -> Result<()> {
    let ltv = lifetime_value(args.arpu, args.gross_margin, args.churn)?;
    if json {
        return render::print_json(&json!({ "ltv": ltv }));
    }
    println!("LTV: {}", render::money(ltv));
    Ok(())
}

fn handle_cac(args: CacArgs, json: bool) -> Result<()> {
    let cac = acquisition_cost(args.spend, args.new_customers)?;
    if json {
        return render::print_json(&json!({ "cac": cac }));
    }
    println!("CAC: {}", render::money(cac));
    Ok(())
}

fn handle_payback(args: PaybackArgs, json: bool) -> Result<()> {
    let months = payback_period(args.cac, args.arpu, args.gross_margin)?;
    let classification = classify_payback(months);
    if json {
        return render::print_json(&classification);
    }
    println!("{} [{}]", classification.message, classification.band);
    Ok(())
}

fn handle_magic_number(args: MagicNumberArgs, json: bool) -> Result<()> {
    let ratio = magic_number(args.net_new_arr, args.prior_spend)?;
    let classification = classify_magic_number(ratio);
    if json {
        return render::print_json(&classification);
    }
    println!("{} [{}]", classification.message, classification.band);
    Ok(())
}

fn handle_churn(args: ChurnArgs, json: bool) -> Result<()> {
    let rate = churn_rate(args.start, args.end, args.new_customers)?;
    if json {
        return render::print_json(&json!({ "churn_pct": rate }));
    }
    println!("Monthly churn: {}", render::pct(rate));
    Ok(())
}

fn handle_runway(args: RunwayArgs, json: bool) -> Result<()> {
    let runway = runway_months(args.cash, args.burn)?;
    let status = runway_status(&runway);
    if json {
        return render::print_json(&json!({ "runway": runway, "status": status }));
    }
    println!("Runway: {}", runway);
    println!("{}", status.message);
    Ok(())
}

fn handle_health(args: HealthArgs, json: bool) -> Result<()> {
    let inputs = HealthInputs {
        arpu: args.arpu,
        gross_margin: args.gross_margin,
        monthly_churn: args.churn,
        sales_marketing_spend: args.spend,
        new_customers: args.new_customers,
    };
    let report = HealthEngine::new().check(&inputs)?;
    tracing::info!(overall = %report.status.overall, "Health check finished");

    if json {
        return render::print_json(&report);
    }
    println!("{}", render::health_table(&report));
    Ok(())
}

fn handle_project(args: ProjectArgs, json: bool) -> Result<()> {
    let revenue = monthly_amount(args.revenue);
    let expenses = monthly_amount(args.expenses);
    let projection = project_cashflow(args.starting_cash, &revenue, &expenses, args.months)?;

    if json {
        return render::print_json(&projection);
    }
    println!("{}", render::cashflow_table(&projection));
    Ok(())
}

fn handle_scenarios(args: ScenariosArgs, json: bool) -> Result<()> {
    let config = load(args.config)?;
    let settings = &config.forecast;
    let scenarios: Vec<Scenario> = settings
        .scenarios
        .iter()
        .map(|s| Scenario::new(s.name.clone(), s.revenue.clone(), s.expenses.clone()))
        .collect();

    tracing::info!(
        count = scenarios.len(),
        starting_cash = %settings.starting_cash,
        months = settings.months,
        "Comparing scenarios"
    );
    let summaries = compare_scenarios(&scenarios, settings.starting_cash, settings.months)?;
    let report = ScenarioReport::new(settings.starting_cash, settings.months, summaries);

    std::fs::write(&args.output, report.to_json_pretty()?)
        .with_context(|| format!("Failed to write scenario report to {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), "Scenario report written");

    if json {
        return render::print_json(&report);
    }
    println!("{}", render::scenario_table(&report.scenarios));
    println!("Report saved to: {}", args.output.display());
    Ok(())
}

fn handle_retail(args: RetailArgs, json: bool) -> Result<()> {
    let config = load(args.config)?;
    let settings = config
        .retail
        .context("The configuration has no [retail] section")?;
    let inputs = retail_inputs(&settings);

    let economics = retail_economics(&inputs)?;
    let floors = price_floors(&inputs)?;
    let sweep = price_sweep(&inputs, &settings.price_points)?;

    if json {
        return render::print_json(&json!({
            "economics": economics,
            "price_floors": floors,
            "price_sweep": sweep,
        }));
    }
    println!("{}", render::retail_table(&economics, &floors));
    if !sweep.is_empty() {
        println!("{}", render::sweep_table(&sweep));
    }
    Ok(())
}

// ==============================================================================
// Helpers
// ==============================================================================

fn load(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => configuration::load_config_from(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => configuration::load_config().with_context(|| {
            format!("Failed to load configuration from {}", configuration::DEFAULT_CONFIG_FILE)
        }),
    }
}

/// A single CLI value is a constant; several are a per-month series.
fn monthly_amount(mut values: Vec<Decimal>) -> MonthlyAmount {
    if values.len() == 1 {
        MonthlyAmount::Constant(values.remove(0))
    } else {
        MonthlyAmount::Series(values)
    }
}

fn retail_inputs(settings: &RetailSettings) -> RetailInputs {
    RetailInputs {
        price: settings.price,
        unit_cost: settings.unit_cost,
        fulfilment_cost: settings.fulfilment_cost,
        payment_fee_rate: settings.payment_fee_rate,
        tax_rate: settings.tax_rate,
        cac: settings.cac,
        purchases_per_customer: settings.purchases_per_customer,
        fixed_costs_monthly: settings.fixed_costs_monthly,
    }
}
