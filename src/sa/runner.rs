//! SA annealing loop execution.
//!
//! Refines a stop-visiting permutation by repeated random swaps under the
//! Metropolis acceptance rule. Temperature cools geometrically once per
//! iteration, and the best order seen anywhere in the run is the one
//! reported.
//!
//! # Complexity
//!
//! O(I · n) tour evaluations for I iterations over n stops.

use rand::Rng;

use super::config::SaConfig;
use crate::distance::closed_tour_length;
use crate::error::DispatchResult;
use crate::models::Point;
use crate::random::{seed_or_random, shuffle};

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best visiting order found, as indices into the stop slice.
    pub order: Vec<usize>,

    /// Closed route: origin, stops in visiting order, origin.
    pub route: Vec<Point>,

    /// Length of the closed route.
    pub length: f64,

    /// Iterations performed (0 when the instance was trivial).
    pub iterations: usize,

    /// Number of accepted moves, improving ones included.
    pub accepted_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,
}

/// Refines the visiting order for the given stops with simulated
/// annealing.
///
/// Starts from a uniformly random permutation and proposes one random
/// swap per iteration. Shorter tours are always accepted; longer ones are
/// accepted with probability `exp(-delta / temperature)`, so early
/// iterations wander and late ones settle. The best order seen across the
/// whole run is returned, which may predate the final state.
///
/// Instances with one stop or none are returned as-is without annealing.
///
/// # Arguments
///
/// * `origin` — Start and end of the tour
/// * `stops` — Locations to visit
/// * `config` — Annealing parameters
///
/// # Examples
///
/// ```
/// use u_dispatch::sa::{anneal_route, SaConfig};
/// use u_dispatch::models::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// let stops = vec![
///     Point::new(10.0, 0.0),
///     Point::new(20.0, 0.0),
///     Point::new(30.0, 0.0),
/// ];
/// let config = SaConfig::default().with_seed(42);
///
/// let result = anneal_route(origin, &stops, &config).expect("valid config");
/// assert_eq!(result.route.len(), stops.len() + 2);
/// assert_eq!(result.route[0], origin);
/// ```
pub fn anneal_route(
    origin: Point,
    stops: &[Point],
    config: &SaConfig,
) -> DispatchResult<SaResult> {
    config.validate()?;

    let n = stops.len();
    if n <= 1 {
        let order: Vec<usize> = (0..n).collect();
        let length = closed_tour_length(origin, stops, &order);
        let route = closed_route(origin, stops, &order);
        return Ok(SaResult {
            order,
            route,
            length,
            iterations: 0,
            accepted_moves: 0,
            final_temperature: config.initial_temperature,
        });
    }

    let mut rng = seed_or_random(config.seed);

    let mut current: Vec<usize> = (0..n).collect();
    shuffle(&mut current, &mut rng);
    let mut current_length = closed_tour_length(origin, stops, &current);

    let mut best = current.clone();
    let mut best_length = current_length;

    let mut temperature = config.initial_temperature;
    let mut accepted_moves = 0usize;

    for _ in 0..config.iterations {
        let mut neighbor = current.clone();
        swap_two(&mut neighbor, &mut rng);
        let neighbor_length = closed_tour_length(origin, stops, &neighbor);
        let delta = neighbor_length - current_length;

        // Metropolis acceptance criterion
        let accept = if delta < 0.0 {
            true
        } else {
            let probability = (-delta / temperature).exp();
            rng.random_range(0.0..1.0) < probability
        };

        if accept {
            current = neighbor;
            current_length = neighbor_length;
            accepted_moves += 1;

            if current_length < best_length {
                best = current.clone();
                best_length = current_length;
            }
        }

        temperature *= config.cooling_rate;
    }

    let route = closed_route(origin, stops, &best);
    Ok(SaResult {
        order: best,
        route,
        length: best_length,
        iterations: config.iterations,
        accepted_moves,
        final_temperature: temperature,
    })
}

/// Exchanges two random positions (which may coincide).
fn swap_two<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let i = rng.random_range(0..perm.len());
    let j = rng.random_range(0..perm.len());
    perm.swap(i, j);
}

/// Wraps a visiting order into the closed point route.
fn closed_route(origin: Point, stops: &[Point], order: &[usize]) -> Vec<Point> {
    let mut route = Vec::with_capacity(order.len() + 2);
    route.push(origin);
    if order.is_empty() {
        return route;
    }
    for &i in order {
        route.push(stops[i]);
    }
    route.push(origin);
    route
}
