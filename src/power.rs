use crate::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerError {
    #[error("Invalid input: provide at least one number and a power")]
    MissingArguments,

    /// Each entry names the argument and shows its value, e.g. `arg2 (abc)`
    #[error("Invalid input: non-numeric value(s): {}", .0.join(", "))]
    NonNumeric(Vec<String>),
}

/// Sum of every base raised to `power`
pub fn power_sum(bases: &[f64], power: f64) -> Result<f64, PowerError> {
    let mut invalid = Vec::new();
    if !power.is_finite() {
        invalid.push(format!("power ({})", Value::from(power).display_string()));
    }
    for (i, base) in bases.iter().enumerate() {
        if !base.is_finite() {
            invalid.push(format!("arg{} ({})", i + 1, Value::from(*base).display_string()));
        }
    }
    if !invalid.is_empty() {
        return Err(PowerError::NonNumeric(invalid));
    }

    Ok(bases.iter().map(|base| base.powf(power)).sum())
}

/// Variadic form: every argument but the last is a base, the last is the power.
///
/// `power_number(&[3.into(), 5.into(), 2.into()])` is `3^2 + 5^2 = 34`.
pub fn power_number(args: &[Value<'_>]) -> Result<f64, PowerError> {
    let Some((power, bases)) = args.split_last() else {
        return Err(PowerError::MissingArguments);
    };
    if bases.is_empty() {
        return Err(PowerError::MissingArguments);
    }

    let mut invalid = Vec::new();
    if !power.is_finite_number() {
        invalid.push(format!("power ({})", power.display_string()));
    }
    for (i, base) in bases.iter().enumerate() {
        if !base.is_finite_number() {
            invalid.push(format!("arg{} ({})", i + 1, base.display_string()));
        }
    }
    if !invalid.is_empty() {
        log::debug!("power_number rejected {} argument(s)", invalid.len());
        return Err(PowerError::NonNumeric(invalid));
    }

    let bases: Vec<f64> = bases.iter().filter_map(Value::as_f64).collect();
    power_sum(&bases, power.as_f64().unwrap_or(f64::NAN))
}
