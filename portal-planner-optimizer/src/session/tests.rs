//! Tests for `RouteSession` state handling.

use std::time::Duration;

use super::*;
use geo::LineString;
use portal_planner_core::test_support::{FailingGeometry, PlanarGeometry, waypoint};
use rstest::{fixture, rstest};

fn charged(id: &str, x: f64, energy: u8) -> Waypoint {
    waypoint(id, x, 0.0)
        .with_energy(energy)
        .expect("energy within range")
}

#[fixture]
fn row() -> Vec<Waypoint> {
    vec![
        charged("a", 0.0, 0),
        charged("b", 140.0, 100),
        charged("c", 70.0, 20),
    ]
}

#[fixture]
fn session(row: Vec<Waypoint>) -> RouteSession<PlanarGeometry> {
    RouteSession::new(PlanarGeometry::with_waypoints(row))
}

#[rstest]
fn new_session_uses_documented_defaults(session: RouteSession<PlanarGeometry>) {
    assert_eq!(session.play_style(), PlayStyle::Quick);
    assert_eq!(session.objective(), ObjectiveKind::Distance);
    assert_eq!(session.travel_mode(), TravelMode::Walking);
    assert_eq!(session.budget(), 10_000);
    assert!(session.budget_trace().is_empty());
    assert!(session.last_result().is_empty());
    assert_eq!(session.statistics(), RouteStatistics::default());
}

#[rstest]
fn distance_plan_leaves_budget_alone(
    mut session: RouteSession<PlanarGeometry>,
    row: Vec<Waypoint>,
) {
    let ordered: Vec<String> = session
        .plan_route(row)
        .expect("valid plan")
        .waypoints()
        .map(|w| w.id.as_str().to_owned())
        .collect();
    assert_eq!(ordered, ["a", "c", "b"]);
    assert_eq!(session.budget(), 10_000);
    assert!(session.budget_trace().is_empty());
}

#[rstest]
fn energy_plans_carry_the_budget_forward(
    mut session: RouteSession<PlanarGeometry>,
    row: Vec<Waypoint>,
) {
    session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 1_000);
    session.plan_route(row.clone()).expect("first plan");
    // gains: b 150, c 110, a 100
    assert_eq!(session.budget_trace(), [1_150, 1_260, 1_360]);
    assert_eq!(session.budget(), 1_360);

    session.plan_route(row).expect("second plan");
    assert_eq!(session.budget(), 1_720);
    assert_eq!(session.budget_trace().len(), 6);
}

#[rstest]
fn short_energy_plan_carries_the_budget_forward(mut session: RouteSession<PlanarGeometry>) {
    session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 1_000);
    let result = session
        .plan_route(vec![charged("p1", 0.0, 100), charged("p2", 1.0, 0)])
        .expect("valid plan");
    assert_eq!(result.ordered.len(), 2);
    assert_eq!(result.final_budget, Some(1_250));
    assert_eq!(session.budget(), 1_250);
    assert_eq!(session.budget_trace(), [1_150, 1_250]);
    assert_eq!(session.statistics().total_xm_balance, 250);
}

#[rstest]
fn short_energy_plan_leaves_unpayable_deploys_off_the_route(
    mut session: RouteSession<PlanarGeometry>,
) {
    session.configure(PlayStyle::Full, ObjectiveKind::Energy, 300);
    let result = session
        .plan_route(vec![charged("a", 0.0, 0), charged("b", 1.0, 0)])
        .expect("valid plan");
    assert!(result.ordered.is_empty());
    assert_eq!(result.unaffordable.len(), 2);
    assert_eq!(session.budget(), 300);
    assert!(session.budget_trace().is_empty());
}

#[rstest]
fn configure_restarts_budget_but_keeps_trace(
    mut session: RouteSession<PlanarGeometry>,
    row: Vec<Waypoint>,
) {
    session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 1_000);
    session.plan_route(row).expect("valid plan");
    session.configure(PlayStyle::Full, ObjectiveKind::ActionPoints, 2_000);
    assert_eq!(session.budget(), 2_000);
    assert!(session.last_result().is_empty());
    assert!(session.last_estimate().is_none());
    assert_eq!(session.budget_trace().len(), 3);
}

#[rstest]
fn reset_clears_route_and_trace(mut session: RouteSession<PlanarGeometry>, row: Vec<Waypoint>) {
    session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 1_000);
    session.plan_route(row).expect("valid plan");
    session.reset();
    assert_eq!(session.budget(), 1_000);
    assert!(session.budget_trace().is_empty());
    assert!(session.last_result().is_empty());
}

#[rstest]
fn duplicate_ids_are_rejected(mut session: RouteSession<PlanarGeometry>) {
    let err = session
        .plan_route(vec![
            charged("a", 0.0, 0),
            charged("b", 1.0, 0),
            charged("a", 2.0, 0),
        ])
        .expect_err("duplicate id");
    assert_eq!(
        err,
        PlanError::DuplicateWaypoint {
            id: WaypointId::from("a")
        }
    );
}

#[rstest]
fn invalid_waypoints_are_rejected_without_touching_state(
    mut session: RouteSession<PlanarGeometry>,
    row: Vec<Waypoint>,
) {
    session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 1_000);
    let mut broken = row;
    if let Some(first) = broken.first_mut() {
        first.resonators = 9;
    }
    let err = session.plan_route(broken).expect_err("invalid waypoint");
    assert!(matches!(
        err,
        PlanError::InvalidWaypoint {
            source: WaypointError::InvalidResonators { found: 9 },
            ..
        }
    ));
    assert_eq!(session.budget(), 1_000);
    assert!(session.budget_trace().is_empty());
}

#[rstest]
fn geometry_failures_surface(row: Vec<Waypoint>) {
    let mut session = RouteSession::new(FailingGeometry);
    let err = session.plan_route(row).expect_err("failing provider");
    assert!(matches!(err, PlanError::Optimize(OptimizeError::Geometry(_))));
}

#[rstest]
fn corridor_plan_queries_the_provider(mut session: RouteSession<PlanarGeometry>) {
    let corridor = LineString::from(vec![(0.0, 0.0), (100.0, 0.0)]);
    let result = session.plan_corridor(&corridor, 10.0).expect("valid plan");
    // b sits 40 m past the corridor's end.
    assert_eq!(result.ordered.len(), 2);
}

#[rstest]
fn corridor_without_waypoints_plans_an_empty_route(mut session: RouteSession<PlanarGeometry>) {
    session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 500);
    let corridor = LineString::from(vec![(0.0, 5_000.0), (100.0, 5_000.0)]);
    let result = session
        .plan_corridor(&corridor, 10.0)
        .expect("an empty corridor is not an error");
    assert!(result.is_empty());
    assert!(result.unaffordable.is_empty());
    assert_eq!(session.budget(), 500);
    assert!(session.budget_trace().is_empty());
    assert_eq!(session.statistics().total_waypoints, 0);
}

#[rstest]
fn statistics_include_time_estimate(
    mut session: RouteSession<PlanarGeometry>,
    row: Vec<Waypoint>,
) {
    session.set_travel_mode(TravelMode::Biking);
    session.plan_route(row).expect("valid plan");
    let stats = session.statistics();
    assert_eq!(stats.total_waypoints, 3);
    assert_eq!(stats.uncaptured_waypoints, 3);
    assert_eq!(stats.total_xm_balance, 360);
    let estimate = session.last_estimate().copied().expect("estimate recorded");
    assert!((estimate.distance_m - 140.0).abs() < 1e-9);
    assert_eq!(estimate.stops, Duration::from_secs(60));
    assert_eq!(stats.estimated_time, estimate.total());
}

#[rstest]
fn figures_follow_play_style(mut session: RouteSession<PlanarGeometry>) {
    let target = waypoint("lonely", 0.0, 0.0)
        .with_resonators(6)
        .expect("resonators within range");
    let quick = session.figures_for(&target).expect("valid waypoint");
    session.configure(PlayStyle::Full, ObjectiveKind::Distance, 0);
    let full = session.figures_for(&target).expect("valid waypoint");
    assert_eq!(quick.cost, 0);
    assert_eq!(full.cost, 100);
    assert_eq!(full.gain, 250);
}
