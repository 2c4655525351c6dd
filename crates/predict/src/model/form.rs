//! Editable form fields and their domains.

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

/// A closed set of options shown as a selector.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option, in display order. The first one is the default.
    fn all() -> &'static [Self];

    /// Wire name of the option.
    fn as_str(self) -> &'static str;

    /// Next option, wrapping around.
    fn next(self) -> Self {
        let options = Self::all();
        let idx = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(idx + 1) % options.len()]
    }

    /// Previous option, wrapping around.
    fn previous(self) -> Self {
        let options = Self::all();
        let idx = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(idx + options.len() - 1) % options.len()]
    }

    /// Parse a wire name.
    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.as_str() == value)
    }
}

/// Balance level of a checking or savings account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountLevel {
    #[default]
    Low,
    Medium,
    High,
    #[serde(rename = "none")]
    NoAccount,
}

impl Choice for AccountLevel {
    fn all() -> &'static [Self] {
        &[
            AccountLevel::Low,
            AccountLevel::Medium,
            AccountLevel::High,
            AccountLevel::NoAccount,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            AccountLevel::Low => "low",
            AccountLevel::Medium => "medium",
            AccountLevel::High => "high",
            AccountLevel::NoAccount => "none",
        }
    }
}

/// Overall credit history quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditHistory {
    #[default]
    Bad,
    Ok,
    Good,
}

impl Choice for CreditHistory {
    fn all() -> &'static [Self] {
        &[CreditHistory::Bad, CreditHistory::Ok, CreditHistory::Good]
    }

    fn as_str(self) -> &'static str {
        match self {
            CreditHistory::Bad => "bad",
            CreditHistory::Ok => "ok",
            CreditHistory::Good => "good",
        }
    }
}

/// Loan purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    Car,
    Electronics,
    Furniture,
    Education,
    Other,
}

impl Choice for Purpose {
    fn all() -> &'static [Self] {
        &[
            Purpose::Car,
            Purpose::Electronics,
            Purpose::Furniture,
            Purpose::Education,
            Purpose::Other,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Purpose::Car => "car",
            Purpose::Electronics => "electronics",
            Purpose::Furniture => "furniture",
            Purpose::Education => "education",
            Purpose::Other => "other",
        }
    }
}

/// Employment duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Employment {
    #[default]
    Short,
    Medium,
    Long,
    Unemployed,
}

impl Choice for Employment {
    fn all() -> &'static [Self] {
        &[
            Employment::Short,
            Employment::Medium,
            Employment::Long,
            Employment::Unemployed,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Employment::Short => "short",
            Employment::Medium => "medium",
            Employment::Long => "long",
            Employment::Unemployed => "unemployed",
        }
    }
}

/// Inclusive integer domain with a fine and a coarse step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub coarse_step: u32,
}

/// Loan duration in months.
pub const DURATION_RANGE: IntRange = IntRange {
    min: 6,
    max: 72,
    step: 1,
    coarse_step: 6,
};

/// Credit amount in dollars.
pub const CREDIT_AMOUNT_RANGE: IntRange = IntRange {
    min: 500,
    max: 50_000,
    step: 500,
    coarse_step: 5_000,
};

/// Applicant age in years.
pub const AGE_RANGE: IntRange = IntRange {
    min: 18,
    max: 75,
    step: 1,
    coarse_step: 5,
};

impl IntRange {
    /// Whether `value` is inside the range and on the step grid.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value) && (value - self.min) % self.step == 0
    }

    /// Clamp into the range and snap to the nearest step.
    pub fn constrain(&self, value: u32) -> u32 {
        let value = value.clamp(self.min, self.max);
        let steps = (value - self.min + self.step / 2) / self.step;
        let last = self.max - (self.max - self.min) % self.step;
        (self.min + steps * self.step).min(last)
    }

    /// Move `value` by `delta` steps of `size`, staying in range.
    fn offset(&self, value: u32, size: u32, delta: i64) -> u32 {
        let moved = i64::from(value) + delta * i64::from(size);
        let bounded = moved.clamp(i64::from(self.min), i64::from(self.max));
        self.constrain(bounded as u32)
    }

    /// Position of `value` in the range as a ratio in [0, 1].
    pub fn ratio(&self, value: u32) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        let value = value.clamp(self.min, self.max);
        f64::from(value - self.min) / f64::from(self.max - self.min)
    }
}

/// Direction of a keyboard adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// One of the eight user-editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    CheckingStatus,
    CreditHistory,
    Purpose,
    SavingsStatus,
    Duration,
    CreditAmount,
    Age,
    Employment,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::CheckingStatus,
            Field::CreditHistory,
            Field::Purpose,
            Field::SavingsStatus,
            Field::Duration,
            Field::CreditAmount,
            Field::Age,
            Field::Employment,
        ]
    }

    /// Literal field name in the request body.
    pub fn name(self) -> &'static str {
        match self {
            Field::CheckingStatus => "checking_status",
            Field::CreditHistory => "credit_history",
            Field::Purpose => "purpose",
            Field::SavingsStatus => "savings_status",
            Field::Duration => "duration",
            Field::CreditAmount => "credit_amount",
            Field::Age => "age",
            Field::Employment => "employment",
        }
    }

    /// Human-readable label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            Field::CheckingStatus => "Checking Account",
            Field::CreditHistory => "Credit History",
            Field::Purpose => "Loan Purpose",
            Field::SavingsStatus => "Savings Level",
            Field::Duration => "Loan Duration (months)",
            Field::CreditAmount => "Credit Amount ($)",
            Field::Age => "Age",
            Field::Employment => "Employment Duration",
        }
    }

    /// Short hint shown while the field has focus.
    pub fn help(self) -> Option<&'static str> {
        match self {
            Field::CheckingStatus => Some("Balance level in checking account"),
            Field::CreditHistory => Some("Overall credit history quality"),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::all().iter().copied().find(|f| f.name() == name)
    }

    /// The integer domain of a range field, `None` for selectors.
    pub fn range(self) -> Option<IntRange> {
        match self {
            Field::Duration => Some(DURATION_RANGE),
            Field::CreditAmount => Some(CREDIT_AMOUNT_RANGE),
            Field::Age => Some(AGE_RANGE),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let all = Field::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Field::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// A typed value for one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    CheckingStatus(AccountLevel),
    CreditHistory(CreditHistory),
    Purpose(Purpose),
    SavingsStatus(AccountLevel),
    Duration(u32),
    CreditAmount(u32),
    Age(u32),
    Employment(Employment),
}

/// Current values of the eight editable fields.
///
/// Every value is always inside its domain: range fields are constrained on
/// write, selector fields can only hold a listed option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub checking_status: AccountLevel,
    pub duration: u32,
    pub credit_history: CreditHistory,
    pub purpose: Purpose,
    pub credit_amount: u32,
    pub savings_status: AccountLevel,
    pub employment: Employment,
    pub age: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            checking_status: AccountLevel::default(),
            duration: 24,
            credit_history: CreditHistory::default(),
            purpose: Purpose::default(),
            credit_amount: 5_000,
            savings_status: AccountLevel::default(),
            employment: Employment::default(),
            age: 35,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field. Integers are clamped to the field's range and snapped
    /// to its step.
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::CheckingStatus(v) => self.checking_status = v,
            FieldValue::CreditHistory(v) => self.credit_history = v,
            FieldValue::Purpose(v) => self.purpose = v,
            FieldValue::SavingsStatus(v) => self.savings_status = v,
            FieldValue::Duration(v) => self.duration = DURATION_RANGE.constrain(v),
            FieldValue::CreditAmount(v) => self.credit_amount = CREDIT_AMOUNT_RANGE.constrain(v),
            FieldValue::Age(v) => self.age = AGE_RANGE.constrain(v),
            FieldValue::Employment(v) => self.employment = v,
        }
    }

    /// Set a field from its wire name and a textual value.
    ///
    /// Unknown names, unknown options and out-of-range integers are rejected
    /// without touching the state.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let field = Field::from_name(name)
            .ok_or_else(|| PredictError::invalid_field(name, "unknown field"))?;
        let value = value.trim();

        let parsed = match field {
            Field::CheckingStatus => FieldValue::CheckingStatus(parse_choice(field, value)?),
            Field::CreditHistory => FieldValue::CreditHistory(parse_choice(field, value)?),
            Field::Purpose => FieldValue::Purpose(parse_choice(field, value)?),
            Field::SavingsStatus => FieldValue::SavingsStatus(parse_choice(field, value)?),
            Field::Employment => FieldValue::Employment(parse_choice(field, value)?),
            Field::Duration => FieldValue::Duration(parse_int(field, DURATION_RANGE, value)?),
            Field::CreditAmount => {
                FieldValue::CreditAmount(parse_int(field, CREDIT_AMOUNT_RANGE, value)?)
            }
            Field::Age => FieldValue::Age(parse_int(field, AGE_RANGE, value)?),
        };

        self.apply(parsed);
        Ok(())
    }

    /// Move a field by one option or one fine step.
    pub fn step(&mut self, field: Field, direction: Direction) {
        self.adjust(field, direction, false);
    }

    /// Move a range field by its coarse step. Selectors move by one option.
    pub fn jump(&mut self, field: Field, direction: Direction) {
        self.adjust(field, direction, true);
    }

    fn adjust(&mut self, field: Field, direction: Direction, coarse: bool) {
        match field {
            Field::CheckingStatus => self.checking_status = cycle(self.checking_status, direction),
            Field::CreditHistory => self.credit_history = cycle(self.credit_history, direction),
            Field::Purpose => self.purpose = cycle(self.purpose, direction),
            Field::SavingsStatus => self.savings_status = cycle(self.savings_status, direction),
            Field::Employment => self.employment = cycle(self.employment, direction),
            Field::Duration => {
                self.duration = shift(DURATION_RANGE, self.duration, direction, coarse)
            }
            Field::CreditAmount => {
                self.credit_amount =
                    shift(CREDIT_AMOUNT_RANGE, self.credit_amount, direction, coarse)
            }
            Field::Age => self.age = shift(AGE_RANGE, self.age, direction, coarse),
        }
    }

    /// Integer value of a range field, `None` for selectors.
    pub fn int_value(&self, field: Field) -> Option<u32> {
        match field {
            Field::Duration => Some(self.duration),
            Field::CreditAmount => Some(self.credit_amount),
            Field::Age => Some(self.age),
            _ => None,
        }
    }

    /// Current value rendered the way it is sent over the wire.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::CheckingStatus => self.checking_status.as_str().to_string(),
            Field::CreditHistory => self.credit_history.as_str().to_string(),
            Field::Purpose => self.purpose.as_str().to_string(),
            Field::SavingsStatus => self.savings_status.as_str().to_string(),
            Field::Employment => self.employment.as_str().to_string(),
            Field::Duration => self.duration.to_string(),
            Field::CreditAmount => self.credit_amount.to_string(),
            Field::Age => self.age.to_string(),
        }
    }

    /// Options of a selector field with the index of the current one.
    pub fn options(&self, field: Field) -> Option<(Vec<&'static str>, usize)> {
        match field {
            Field::CheckingStatus => Some(option_list(self.checking_status)),
            Field::CreditHistory => Some(option_list(self.credit_history)),
            Field::Purpose => Some(option_list(self.purpose)),
            Field::SavingsStatus => Some(option_list(self.savings_status)),
            Field::Employment => Some(option_list(self.employment)),
            _ => None,
        }
    }
}

fn cycle<T: Choice>(value: T, direction: Direction) -> T {
    match direction {
        Direction::Forward => value.next(),
        Direction::Backward => value.previous(),
    }
}

fn shift(range: IntRange, value: u32, direction: Direction, coarse: bool) -> u32 {
    let size = if coarse { range.coarse_step } else { range.step };
    range.offset(value, size, direction.sign())
}

fn option_list<T: Choice>(current: T) -> (Vec<&'static str>, usize) {
    let options = T::all();
    let selected = options.iter().position(|o| *o == current).unwrap_or(0);
    (options.iter().map(|o| o.as_str()).collect(), selected)
}

fn parse_choice<T: Choice>(field: Field, value: &str) -> Result<T> {
    T::parse(value).ok_or_else(|| {
        let allowed: Vec<&str> = T::all().iter().map(|o| o.as_str()).collect();
        PredictError::invalid_field(
            field.name(),
            format!("'{}' is not one of {}", value, allowed.join(", ")),
        )
    })
}

fn parse_int(field: Field, range: IntRange, value: &str) -> Result<u32> {
    let parsed: u32 = value.parse().map_err(|_| {
        PredictError::invalid_field(field.name(), format!("'{}' is not an integer", value))
    })?;
    if !(range.min..=range.max).contains(&parsed) {
        return Err(PredictError::invalid_field(
            field.name(),
            format!("must be between {} and {}", range.min, range.max),
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_matches_documented_defaults() {
        let form = FormState::default();
        assert_eq!(form.checking_status, AccountLevel::Low);
        assert_eq!(form.credit_history, CreditHistory::Bad);
        assert_eq!(form.purpose, Purpose::Car);
        assert_eq!(form.savings_status, AccountLevel::Low);
        assert_eq!(form.employment, Employment::Short);
        assert_eq!(form.duration, 24);
        assert_eq!(form.credit_amount, 5000);
        assert_eq!(form.age, 35);
    }

    #[test]
    fn test_choice_cycles_both_ways() {
        assert_eq!(AccountLevel::NoAccount.next(), AccountLevel::Low);
        assert_eq!(AccountLevel::Low.previous(), AccountLevel::NoAccount);
        assert_eq!(Purpose::Car.next(), Purpose::Electronics);
        assert_eq!(CreditHistory::Bad.previous(), CreditHistory::Good);
    }

    #[test]
    fn test_account_level_none_wire_name() {
        assert_eq!(AccountLevel::NoAccount.as_str(), "none");
        assert_eq!(
            serde_json::to_string(&AccountLevel::NoAccount).unwrap(),
            "\"none\""
        );
        assert_eq!(AccountLevel::parse("none"), Some(AccountLevel::NoAccount));
    }

    #[test]
    fn test_apply_clamps_ranges() {
        let mut form = FormState::new();
        form.apply(FieldValue::Duration(100));
        assert_eq!(form.duration, 72);
        form.apply(FieldValue::Age(3));
        assert_eq!(form.age, 18);
        form.apply(FieldValue::CreditAmount(0));
        assert_eq!(form.credit_amount, 500);
    }

    #[test]
    fn test_credit_amount_snaps_to_step() {
        let mut form = FormState::new();
        form.apply(FieldValue::CreditAmount(5_240));
        assert_eq!(form.credit_amount, 5_000);
        form.apply(FieldValue::CreditAmount(5_250));
        assert_eq!(form.credit_amount, 5_500);
        form.apply(FieldValue::CreditAmount(49_999));
        assert_eq!(form.credit_amount, 50_000);
    }

    #[test]
    fn test_set_by_name() {
        let mut form = FormState::new();
        form.set("purpose", "education").unwrap();
        form.set("savings_status", "none").unwrap();
        form.set("age", "42").unwrap();
        assert_eq!(form.purpose, Purpose::Education);
        assert_eq!(form.savings_status, AccountLevel::NoAccount);
        assert_eq!(form.age, 42);
    }

    #[test]
    fn test_set_rejects_out_of_domain() {
        let mut form = FormState::new();
        let before = form.clone();

        assert!(matches!(
            form.set("purpose", "yacht"),
            Err(PredictError::InvalidField { .. })
        ));
        assert!(form.set("duration", "73").is_err());
        assert!(form.set("age", "abc").is_err());
        assert!(form.set("housing", "rent").is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn test_step_and_jump() {
        let mut form = FormState::new();
        form.step(Field::Duration, Direction::Forward);
        assert_eq!(form.duration, 25);
        form.jump(Field::CreditAmount, Direction::Backward);
        assert_eq!(form.credit_amount, 500);
        form.jump(Field::CreditAmount, Direction::Backward);
        assert_eq!(form.credit_amount, 500);
        form.step(Field::Employment, Direction::Backward);
        assert_eq!(form.employment, Employment::Unemployed);
    }

    #[test]
    fn test_range_contains_and_ratio() {
        assert!(CREDIT_AMOUNT_RANGE.contains(500));
        assert!(!CREDIT_AMOUNT_RANGE.contains(750));
        assert!(!DURATION_RANGE.contains(5));
        assert_eq!(AGE_RANGE.ratio(18), 0.0);
        assert_eq!(AGE_RANGE.ratio(75), 1.0);
    }

    #[test]
    fn test_field_order_and_names() {
        assert_eq!(Field::all().len(), 8);
        assert_eq!(Field::Employment.next(), Field::CheckingStatus);
        assert_eq!(Field::from_name("credit_amount"), Some(Field::CreditAmount));
        assert_eq!(Field::from_name("job"), None);
        assert!(Field::Age.range().is_some());
        assert!(Field::Purpose.range().is_none());
    }

    #[test]
    fn test_help_texts() {
        assert_eq!(
            Field::CheckingStatus.help(),
            Some("Balance level in checking account")
        );
        assert_eq!(
            Field::CreditHistory.help(),
            Some("Overall credit history quality")
        );
        assert_eq!(Field::Age.help(), None);
    }

    #[test]
    fn test_options_report_selection() {
        let mut form = FormState::new();
        form.apply(FieldValue::Purpose(Purpose::Furniture));
        let (options, selected) = form.options(Field::Purpose).unwrap();
        assert_eq!(options.len(), 5);
        assert_eq!(options[selected], "furniture");
        assert!(form.options(Field::Age).is_none());
    }
}
