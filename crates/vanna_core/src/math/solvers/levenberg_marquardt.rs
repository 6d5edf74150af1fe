//! Levenberg-Marquardt damped least-squares solver.
//!
//! This module provides the [`LevenbergMarquardtSolver`] for one-parameter
//! nonlinear least-squares problems, the shape taken by implied volatility
//! inversion and other single-knob calibrations.
//!
//! # Algorithm
//!
//! The Levenberg-Marquardt algorithm blends Gauss-Newton and gradient descent.
//! With a single parameter the normal equations collapse to scalar arithmetic:
//!
//! ```text
//! (j² + λ) δ = -j r
//! x_{n+1} = x_n + δ
//! ```
//!
//! where:
//! - `j` is the derivative of the residual (forward differences)
//! - `r` is the residual value
//! - `λ` is the damping factor (adjusted during iteration)
//! - `δ` is the parameter update step
//!
//! # Example
//!
//! ```
//! use vanna_core::math::solvers::{LevenbergMarquardtSolver, LMConfig};
//!
//! // Recover the decay rate b from y = exp(-b * x) sampled at x = 2
//! let observed = (-0.8_f64).exp();
//! let residual = |b: f64| (-b * 2.0).exp() - observed;
//!
//! let config = LMConfig::default();
//! let solver = LevenbergMarquardtSolver::new(config);
//! let result = solver.solve(residual, 1.0).unwrap();
//!
//! // Should converge to b ≈ 0.4
//! assert!(result.converged);
//! assert!((result.param - 0.4).abs() < 1e-6);
//! ```

use crate::types::SolverError;

/// Configuration for the Levenberg-Marquardt solver.
///
/// # Fields
///
/// * `tolerance` - Convergence tolerance for the residual norm
/// * `max_iterations` - Maximum number of iterations
/// * `initial_lambda` - Initial damping factor
/// * `lambda_up` - Factor to increase lambda when a step is rejected
/// * `lambda_down` - Factor to decrease lambda when a step is accepted
/// * `min_lambda` - Minimum value for lambda
/// * `max_lambda` - Maximum value for lambda
/// * `param_tolerance` - Convergence tolerance for the relative step size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LMConfig {
    /// Convergence tolerance for the residual norm.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Initial damping factor.
    pub initial_lambda: f64,
    /// Factor to increase lambda on rejected step.
    pub lambda_up: f64,
    /// Factor to decrease lambda on accepted step.
    pub lambda_down: f64,
    /// Minimum damping factor.
    pub min_lambda: f64,
    /// Maximum damping factor.
    pub max_lambda: f64,
    /// Tolerance for parameter change convergence.
    pub param_tolerance: f64,
}

impl Default for LMConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
            initial_lambda: 1e-3,
            lambda_up: 10.0,
            lambda_down: 0.1,
            min_lambda: 1e-10,
            max_lambda: 1e10,
            param_tolerance: 1e-10,
        }
    }
}

impl LMConfig {
    /// Create a new LM configuration.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }

    /// Create a fast configuration with relaxed tolerances.
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 50,
            ..Default::default()
        }
    }

    /// Create a high precision configuration.
    pub fn high_precision() -> Self {
        Self {
            tolerance: 1e-14,
            max_iterations: 500,
            param_tolerance: 1e-14,
            ..Default::default()
        }
    }
}

/// Result of a Levenberg-Marquardt optimisation.
#[derive(Debug, Clone, PartialEq)]
pub struct LMResult {
    /// Final optimised parameter.
    pub param: f64,
    /// Final residual sum of squares.
    pub residual_ss: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether convergence was achieved.
    pub converged: bool,
    /// Final lambda value.
    pub final_lambda: f64,
}

impl LMResult {
    /// Create a new LM result.
    pub fn new(
        param: f64,
        residual_ss: f64,
        iterations: usize,
        converged: bool,
        final_lambda: f64,
    ) -> Self {
        Self {
            param,
            residual_ss,
            iterations,
            converged,
            final_lambda,
        }
    }

    /// Absolute residual at the final parameter.
    ///
    /// The solver can report `converged` when the step size stalls rather
    /// than when the residual vanishes, so callers that need the objective
    /// actually attained should inspect this value.
    pub fn residual_abs(&self) -> f64 {
        self.residual_ss.sqrt()
    }
}

/// Levenberg-Marquardt solver for one-parameter least-squares problems.
///
/// Solves optimisation problems of the form:
/// ```text
/// min_x r(x)²
/// ```
///
/// where `r(x)` is a scalar residual function of a scalar parameter `x`.
///
/// The solver works with `f64` for optimal numerical stability.
///
/// # Example
///
/// ```
/// use vanna_core::math::solvers::{LevenbergMarquardtSolver, LMConfig, LMResult};
///
/// let config = LMConfig::default();
/// let solver = LevenbergMarquardtSolver::new(config);
///
/// // Linear residual: driven to zero at x = 3
/// let result = solver.solve(|x| x - 3.0, 0.0).unwrap();
/// assert!(result.converged);
/// assert!((result.param - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct LevenbergMarquardtSolver {
    config: LMConfig,
}

impl LevenbergMarquardtSolver {
    /// Create a new LM solver with the given configuration.
    pub fn new(config: LMConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: LMConfig::default(),
        }
    }

    /// Get the solver configuration.
    pub fn config(&self) -> &LMConfig {
        &self.config
    }

    /// Solve the one-parameter least-squares problem.
    ///
    /// The residual is evaluated at unvalidated trial parameters; a trial
    /// that produces NaN fails the acceptance comparison and is rejected
    /// like any other uphill step.
    ///
    /// # Arguments
    ///
    /// * `residual` - Function that computes the residual given the parameter
    /// * `initial_param` - Initial parameter guess
    ///
    /// # Returns
    ///
    /// * `Ok(LMResult)` - Optimisation result with the final parameter, also
    ///   returned (with `converged = false`) when the iteration limit is hit
    /// * `Err(SolverError)` - If the residual is not finite at the start point
    pub fn solve<F>(&self, residual: F, initial_param: f64) -> Result<LMResult, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        let mut x = initial_param;
        let mut lambda = self.config.initial_lambda;

        // Compute initial residual
        let mut r = residual(x);
        if !r.is_finite() {
            return Err(SolverError::NonFiniteObjective { x });
        }
        let mut ss = r * r;

        for iteration in 0..self.config.max_iterations {
            // Check convergence on residual
            if ss.sqrt() < self.config.tolerance {
                return Ok(LMResult::new(x, ss, iteration, true, lambda));
            }

            // Derivative of the residual using forward differences
            let j = forward_diff(&residual, x, r);

            // Solve (j² + λ) δ = -j r
            let denom = j * j + lambda;
            if !denom.is_finite() || denom <= 0.0 {
                // Increase lambda and try again
                lambda = (lambda * self.config.lambda_up).min(self.config.max_lambda);
                continue;
            }
            let delta = -(j * r) / denom;

            // Check for parameter change convergence
            if delta.abs() / x.abs().max(1.0) < self.config.param_tolerance {
                return Ok(LMResult::new(x, ss, iteration, true, lambda));
            }

            // Trial update
            let new_x = x + delta;
            let new_r = residual(new_x);
            let new_ss = new_r * new_r;

            // Accept or reject step (NaN trial fails the comparison)
            if new_ss < ss {
                // Accept step
                x = new_x;
                r = new_r;
                ss = new_ss;
                lambda = (lambda * self.config.lambda_down).max(self.config.min_lambda);
            } else {
                // Reject step, increase lambda
                lambda = (lambda * self.config.lambda_up).min(self.config.max_lambda);
            }
        }

        // Return result even if not converged
        Ok(LMResult::new(
            x,
            ss,
            self.config.max_iterations,
            false,
            lambda,
        ))
    }
}

/// Derivative of the residual at `x` using forward differences.
#[inline]
fn forward_diff<F>(residual: &F, x: f64, r0: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = 1e-8 * x.abs().max(1.0);
    (residual(x + h) - r0) / h
}
