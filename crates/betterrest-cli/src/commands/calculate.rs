//! Calculate command implementation.

use crate::cli::CalculateArgs;
use crate::error::Result;
use crate::form::{SleepForm, Step};
use crate::output::Formatter;
use betterrest_domain::traits::SleepRegressor;
use betterrest_domain::{BedtimeEstimator, EstimationResult, WakeTime};
use std::fmt::Display;
use tracing::warn;

/// Execute the calculate command.
///
/// Arguments that are not given keep the value from `base`.
pub fn execute_calculate<R>(
    args: CalculateArgs,
    base: &SleepForm,
    estimator: &BedtimeEstimator<R>,
    formatter: &Formatter,
) -> Result<EstimationResult>
where
    R: SleepRegressor,
    R::Error: Display,
{
    let form = apply_args(args, base)?;
    let result = calculate(estimator, &form);
    println!("{}", formatter.format_outcome(&form, &result)?);
    Ok(result)
}

/// Run one estimation for the current form values.
///
/// The estimator discards the failure cause; it is logged here before the
/// generic result is returned.
pub fn calculate<R>(estimator: &BedtimeEstimator<R>, form: &SleepForm) -> EstimationResult
where
    R: SleepRegressor,
    R::Error: Display,
{
    let request = form.request();
    let outcome = estimator.try_estimate(&request);
    if let Err(e) = &outcome {
        warn!(
            error = %e,
            wake = %request.wake_time,
            sleep_hours = request.sleep_goal_hours,
            coffee_cups = request.caffeine_cups,
            "Bedtime estimation failed"
        );
    }
    outcome.into()
}

/// Process exit status when the error alert was shown.
pub const EXIT_ESTIMATION_FAILED: u8 = 1;

/// Process exit status for a calculation outcome.
pub fn exit_status(result: &EstimationResult) -> u8 {
    if result.is_success() {
        0
    } else {
        EXIT_ESTIMATION_FAILED
    }
}

/// Overlay command-line values onto a form.
pub fn apply_args(args: CalculateArgs, base: &SleepForm) -> Result<SleepForm> {
    let mut form = *base;
    if let Some(wake) = args.wake {
        form.set_wake(WakeTime::parse(&wake)?);
    }
    if let Some(hours) = args.sleep {
        form.step_sleep(Step::Set(hours))?;
    }
    if let Some(cups) = args.coffee {
        form.step_coffee(Step::Set(cups))?;
    }
    Ok(form)
}
