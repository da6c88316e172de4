use super::{Branch, ClockTime, Conjunct, TimeRule, WeekdaySpan};
use crate::error::RuleParseError;

/// Parses one time-rule string into a `TimeRule`.
///
/// Splits on the literal `or`, then each branch on the literal `and`. A
/// fragment without a `:` is not a conjunct and is skipped, matching the
/// permissive source data; a branch left with no conjuncts contributes
/// nothing. Malformed weekday or time values are reported as typed errors
/// rather than matching or panicking.
pub fn parse_rule(input: &str) -> Result<TimeRule, RuleParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RuleParseError::Empty);
    }
    if trimmed == "all" {
        return Ok(TimeRule::All);
    }

    let mut branches = Vec::new();
    for branch_str in trimmed.split("or") {
        let mut conjuncts = Vec::new();
        for conjunct_str in branch_str.split("and") {
            let Some((weekday_part, time_part)) = conjunct_str.split_once(':') else {
                continue;
            };
            conjuncts.push(parse_conjunct(
                weekday_part.trim(),
                time_part.trim(),
                conjunct_str.trim(),
            )?);
        }
        if !conjuncts.is_empty() {
            branches.push(Branch { conjuncts });
        }
    }

    Ok(TimeRule::AnyOf(branches))
}

fn parse_conjunct(
    weekday_part: &str,
    time_part: &str,
    conjunct: &str,
) -> Result<Conjunct, RuleParseError> {
    let days = match weekday_part.split_once('-') {
        Some((start, end)) => WeekdaySpan {
            start: parse_weekday(start.trim(), conjunct)?,
            end: parse_weekday(end.trim(), conjunct)?,
        },
        None => WeekdaySpan::single(parse_weekday(weekday_part, conjunct)?),
    };
    let cutoff = parse_time(time_part, conjunct)?;
    Ok(Conjunct { days, cutoff })
}

fn parse_weekday(part: &str, conjunct: &str) -> Result<u8, RuleParseError> {
    let day: u8 = part
        .parse()
        .map_err(|_| RuleParseError::InvalidWeekday {
            part: part.to_string(),
            conjunct: conjunct.to_string(),
        })?;
    if !(1..=7).contains(&day) {
        return Err(RuleParseError::WeekdayOutOfRange { day });
    }
    Ok(day)
}

fn parse_time(part: &str, conjunct: &str) -> Result<ClockTime, RuleParseError> {
    let invalid = || RuleParseError::InvalidTime {
        part: part.to_string(),
        conjunct: conjunct.to_string(),
    };

    if part.len() != 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hour: u8 = part[..2].parse().map_err(|_| invalid())?;
    let minute: u8 = part[2..].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok(ClockTime::new(hour, minute))
}
