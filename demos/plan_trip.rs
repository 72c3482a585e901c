use std::{sync::Arc, time::Duration};
use trip_planner_rs::{
    Budget, DelayTimer, GenerationOutcome, Interest, Planner, PlannerConfig, TripRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::try_init().ok();

    let planner = Planner::new(PlannerConfig::from_env()?)
        .with_timer(DelayTimer::new(Duration::from_millis(300)));
    let theme = planner.config().theme.clone();
    let session = Arc::new(planner.session());

    println!("=== Jharkhand Trip Planner ===\n");

    let request = TripRequest::new(2, Interest::Culture, Budget::Low);
    println!(
        "Request: {} days, {} focus, {} budget\n",
        request.days, request.interest, request.budget
    );

    match planner.generate(&session, request).await? {
        GenerationOutcome::Completed(itinerary) => {
            println!("{}", itinerary.render(&theme));
            let summary = itinerary.summary();
            println!(
                "\nPlanned {} of {} requested days",
                summary.planned_days, summary.requested_days
            );
        }
        GenerationOutcome::Suppressed => println!("Generation was suppressed"),
    }

    // A second submission while the first is still thinking is turned away
    session.reset();
    let pending = planner.spawn_generate(
        Arc::clone(&session),
        TripRequest::new(5, Interest::Adventure, Budget::High),
    )?;
    if let Err(err) = session.submit(TripRequest::default()) {
        println!("\nDouble submit rejected: {}", err);
    }

    // Leaving the screen mid-generation drops the late result
    pending.cancel();
    let outcome = pending.outcome().await?;
    println!(
        "Cancelled generation suppressed: {}, session status: {}",
        outcome.is_suppressed(),
        session.status()
    );

    println!("\n--- Session Log ---");
    println!("{}", session.replay());

    Ok(())
}
