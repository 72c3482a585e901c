use crate::{
    listings::{
        bar_heights, group_digits, guide_filters, thousands_label, GuideFilter,
        MarketplaceFilter, ReferenceData, TOP_MONTHS,
    },
    Budget, GenerationOutcome, ImmediateTimer, Interest, Planner, PlannerConfig, ThemeRole,
    TripRequest, TRIP_DAYS,
};
use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::sync::Arc;
use tracing::{info, warn};

fn command() -> Command {
    Command::new("trip-planner")
        .version("0.1.0")
        .about("Plan a Jharkhand trip and browse guides, crafts, districts and visitor trends")
        .subcommand_required(true)
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Disable coloured output"),
        )
        .subcommand(
            Command::new("plan")
                .about("Generate an itinerary")
                .arg(
                    Arg::new("days")
                        .short('d')
                        .long("days")
                        .value_name("COUNT")
                        .help("Trip length in days (1-5)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("interest")
                        .short('i')
                        .long("interest")
                        .value_name("INTEREST")
                        .help("Nature, Culture, Adventure or Spiritual")
                        .value_parser(|s: &str| s.parse::<Interest>().map_err(|e| e.to_string())),
                )
                .arg(
                    Arg::new("budget")
                        .short('b')
                        .long("budget")
                        .value_name("BUDGET")
                        .help("Low, Medium or High")
                        .value_parser(|s: &str| s.parse::<Budget>().map_err(|e| e.to_string())),
                )
                .arg(
                    Arg::new("request")
                        .short('r')
                        .long("request")
                        .value_name("JSON")
                        .help("Full request as JSON, e.g. '{\"days\":2,\"interest\":\"Culture\",\"budget\":\"Low\"}'")
                        .conflicts_with_all(["days", "interest", "budget"]),
                )
                .arg(
                    Arg::new("no-delay")
                        .long("no-delay")
                        .action(ArgAction::SetTrue)
                        .help("Skip the thinking delay"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the itinerary as JSON"),
                ),
        )
        .subcommand(
            Command::new("guides").about("List local guides").arg(
                Arg::new("specialization")
                    .short('s')
                    .long("specialization")
                    .value_name("NAME")
                    .help("Exact specialization, or `all`")
                    .default_value("all"),
            ),
        )
        .subcommand(
            Command::new("marketplace")
                .about("List handicrafts and homestays")
                .arg(
                    Arg::new("kind")
                        .short('k')
                        .long("kind")
                        .value_name("KIND")
                        .help("all, handicraft or homestay")
                        .default_value("all"),
                ),
        )
        .subcommand(Command::new("districts").about("List districts and their highlights"))
        .subcommand(Command::new("stats").about("Show monthly visitor statistics"))
}

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    let mut config = PlannerConfig::from_env().context("failed to read planner configuration")?;
    if matches.get_flag("no-color") {
        config = config.with_color(false);
    }
    if !config.theme.ansi {
        colored::control::set_override(false);
    }

    match matches.subcommand() {
        Some(("plan", sub)) => plan(config, sub).await,
        Some(("guides", sub)) => {
            guides(&config, sub);
            Ok(())
        }
        Some(("marketplace", sub)) => marketplace(&config, sub),
        Some(("districts", _)) => {
            districts(&config);
            Ok(())
        }
        Some(("stats", _)) => {
            stats(&config);
            Ok(())
        }
        _ => bail!("no subcommand given"),
    }
}

fn request_from(config: &PlannerConfig, matches: &ArgMatches) -> anyhow::Result<TripRequest> {
    if let Some(raw) = matches.get_one::<String>("request") {
        return TripRequest::from_json(raw).context("invalid --request payload");
    }

    let defaults = &config.default_request;
    Ok(TripRequest::new(
        matches.get_one::<i64>("days").copied().unwrap_or(defaults.days),
        matches
            .get_one::<Interest>("interest")
            .copied()
            .unwrap_or(defaults.interest),
        matches
            .get_one::<Budget>("budget")
            .copied()
            .unwrap_or(defaults.budget),
    ))
}

async fn plan(config: PlannerConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let request = request_from(&config, matches)?;
    let as_json = matches.get_flag("json");

    let mut planner = Planner::new(config);
    if matches.get_flag("no-delay") {
        planner = planner.with_timer(ImmediateTimer);
    }
    let theme = planner.config().theme.clone();

    if !TRIP_DAYS.contains(&request.days) {
        warn!(days = request.days, "requested duration outside 1-5, clamping");
    }
    if !planner.catalog().has_own_entry(request.interest) {
        info!(
            interest = %request.interest,
            "no curated {} track yet, showing Nature highlights",
            request.interest
        );
    }

    eprintln!(
        "{}",
        theme.paint(ThemeRole::Primary, "AI is creating your perfect itinerary...")
    );
    eprintln!(
        "{}",
        theme.paint(
            ThemeRole::TextSecondary,
            &format!(
                "Analyzing {} destinations, weather patterns, and local events",
                request.interest.as_str().to_lowercase()
            )
        )
    );

    let session = Arc::new(planner.session());
    let pending = planner.spawn_generate(Arc::clone(&session), request)?;

    let outcome = tokio::select! {
        outcome = pending.outcome() => outcome?,
        _ = tokio::signal::ctrl_c() => {
            session.cancel_pending();
            GenerationOutcome::Suppressed
        }
    };

    match outcome {
        GenerationOutcome::Completed(itinerary) => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&itinerary)?);
            } else {
                println!("\n{}", itinerary.render(&theme));
            }
        }
        GenerationOutcome::Suppressed => {
            eprintln!("Planning cancelled");
        }
    }

    Ok(())
}

fn guides(config: &PlannerConfig, matches: &ArgMatches) {
    let theme = &config.theme;
    let data = ReferenceData::built_in();
    let filter = matches
        .get_one::<String>("specialization")
        .map(|s| s.parse::<GuideFilter>().unwrap_or_default())
        .unwrap_or_default();

    let chips: Vec<String> = guide_filters()
        .iter()
        .map(|chip| {
            if *chip == filter {
                theme.paint(ThemeRole::TabActiveText, &format!("[{}]", chip.label()))
            } else {
                theme.paint(ThemeRole::TabInactiveText, chip.label())
            }
        })
        .collect();
    println!("{}", chips.join("  "));

    let matched = data.guides(&filter);
    println!(
        "\n{}",
        theme.paint(
            ThemeRole::HeaderBackground,
            &format!("Available Guides ({})", matched.len())
        )
    );

    for guide in matched {
        let badge = if guide.verified { " ✔ Verified" } else { "" };
        println!(
            "\n{}{}",
            theme.paint(ThemeRole::Text, &guide.name),
            theme.paint(ThemeRole::Primary, badge)
        );
        println!(
            "{}",
            theme.paint(
                ThemeRole::TextSecondary,
                &format!(
                    "{} | {} years | ★ {:.1} | {}",
                    guide.specialization,
                    guide.experience_years,
                    guide.rating,
                    guide.languages.join(", ")
                )
            )
        );
    }
}

fn marketplace(config: &PlannerConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let theme = &config.theme;
    let data = ReferenceData::built_in();
    let filter: MarketplaceFilter = matches
        .get_one::<String>("kind")
        .map(String::as_str)
        .unwrap_or("all")
        .parse()?;

    let counts = data.marketplace_counts();
    println!(
        "{}",
        theme.paint(
            ThemeRole::TextSecondary,
            &format!(
                "All ({})  Handicrafts ({})  Homestays ({})",
                counts.all, counts.handicraft, counts.homestay
            )
        )
    );

    for item in data.marketplace(filter) {
        let rating = item
            .rating
            .map(|r| format!(" ★ {:.1}", r))
            .unwrap_or_default();
        println!(
            "\n{}{}",
            theme.paint(ThemeRole::Text, &item.title),
            theme.paint(ThemeRole::Primary, &rating)
        );
        println!("{}", theme.paint(ThemeRole::TextSecondary, &item.description));
        println!(
            "{}",
            theme.paint(ThemeRole::Primary, &format!("{} ({})", item.price, item.kind))
        );
    }

    Ok(())
}

fn districts(config: &PlannerConfig) {
    let theme = &config.theme;
    for district in ReferenceData::built_in().districts() {
        println!("\n{}", theme.paint(ThemeRole::Text, &district.name));
        println!("{}", theme.paint(ThemeRole::TextSecondary, &district.description));
        println!(
            "{}",
            theme.paint(
                ThemeRole::Primary,
                &format!("Highlights: {}", district.highlights.join(", "))
            )
        );
    }
}

const BAR_WIDTH: f64 = 40.0;

fn stats(config: &PlannerConfig) {
    let theme = &config.theme;
    let data = ReferenceData::built_in();
    let summary = data.visitor_summary();

    println!(
        "{}",
        theme.paint(ThemeRole::HeaderBackground, "=== Tourism Analytics ===")
    );
    println!("Total Visitors: {}", group_digits(summary.total));
    println!("Average Monthly: {}", group_digits(summary.average));
    if let Some(month) = &summary.peak_month {
        println!(
            "Peak Month: {} ({} visitors)",
            month,
            thousands_label(summary.peak_visitors)
        );
    }

    println!();
    for ((month, width), stat) in bar_heights(data.stats(), BAR_WIDTH)
        .into_iter()
        .zip(data.stats())
    {
        let bar = "█".repeat(width.round() as usize);
        println!(
            "{:>3} {} {}",
            month,
            theme.paint(ThemeRole::Primary, &bar),
            thousands_label(stat.visitors)
        );
    }

    println!(
        "\n{}",
        theme.paint(ThemeRole::HeaderBackground, "Top Performing Months")
    );
    for (rank, stat) in data.top_months(TOP_MONTHS) {
        println!(
            "{}. {:<4} {} visitors",
            rank,
            stat.month,
            group_digits(stat.visitors)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_plan_args_parse_into_request() {
        let matches = command()
            .try_get_matches_from([
                "trip-planner", "plan", "--days", "-2", "--interest", "culture", "--budget", "high",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let request = request_from(&PlannerConfig::default(), sub).unwrap();
        assert_eq!(request, TripRequest::new(-2, Interest::Culture, Budget::High));
    }

    #[test]
    fn test_plan_defaults_to_form_reset_state() {
        let matches = command()
            .try_get_matches_from(["trip-planner", "plan"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let request = request_from(&PlannerConfig::default(), sub).unwrap();
        assert_eq!(request, TripRequest::default());
    }

    #[test]
    fn test_request_conflicts_with_field_flags() {
        let result = command().try_get_matches_from([
            "trip-planner",
            "plan",
            "--days",
            "2",
            "--request",
            "{}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_interest_is_a_usage_error() {
        let result =
            command().try_get_matches_from(["trip-planner", "plan", "--interest", "beach"]);
        assert!(result.is_err());
    }
}
