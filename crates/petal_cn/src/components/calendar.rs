//! Calendar component over `chrono::NaiveDate`
//!
//! Three layers: `Day` is a per-cell snapshot, `month_weeks` produces the
//! 7-column grid for one month, and `Calendar` holds the selected date in an
//! uncontrolled value store plus the displayed-month navigation state.
//!
//! # Example
//!
//! ```ignore
//! use petal_cn::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut calendar = cn::calendar()
//!     .default_month(parse_date("2026-01-01")?)
//!     .on_change(|date| println!("picked {date}"));
//!
//! assert!(calendar.select(parse_date("2026-01-15")?));
//! calendar.next_month();
//! ```

use crate::mods::Mods;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use petal_core::{ChangeHandler, Uncontrolled, UncontrolledConfig};
use petal_theme::{ColorToken, RadiusToken, StyleVars, ThemeState, VarValue, VarsResolver};
use std::sync::Arc;

/// Calendar size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarSize {
    /// 30px day cell
    Small,
    /// 36px day cell
    #[default]
    Medium,
    /// 42px day cell
    Large,
}

impl CalendarSize {
    fn day_size(&self) -> f32 {
        match self {
            CalendarSize::Small => 30.0,
            CalendarSize::Medium => 36.0,
            CalendarSize::Large => 42.0,
        }
    }
}

/// Errors from parsing a calendar date string
#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    /// The input did not match `YYYY-MM-DD`
    #[error("invalid date: {0}")]
    Invalid(#[from] chrono::ParseError),
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    Ok(NaiveDate::parse_from_str(input, "%Y-%m-%d")?)
}

// ============================================================================
// Day snapshot
// ============================================================================

/// One day cell, fully described
///
/// `Calendar::day` produces these; hosts with range pickers can also build
/// them directly and set the range flags themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    size: CalendarSize,
    selected: bool,
    weekend: bool,
    outside: bool,
    hidden: bool,
    disabled: bool,
    in_range: bool,
    first_in_range: bool,
    last_in_range: bool,
    today: bool,
}

impl Day {
    /// Create a day cell for a date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            size: CalendarSize::default(),
            selected: false,
            weekend: false,
            outside: false,
            hidden: false,
            disabled: false,
            in_range: false,
            first_in_range: false,
            last_in_range: false,
            today: false,
        }
    }

    /// Set the cell size
    pub fn size(mut self, size: CalendarSize) -> Self {
        self.size = size;
        self
    }

    /// Mark as the selected date
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark as a weekend day
    pub fn weekend(mut self, weekend: bool) -> Self {
        self.weekend = weekend;
        self
    }

    /// Mark as belonging to an adjacent month
    pub fn outside(mut self, outside: bool) -> Self {
        self.outside = outside;
        self
    }

    /// Hide the cell entirely
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Mark as unselectable
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark as inside a selected range
    pub fn in_range(mut self, in_range: bool) -> Self {
        self.in_range = in_range;
        self
    }

    /// Mark as the first day of a selected range
    pub fn first_in_range(mut self, first: bool) -> Self {
        self.first_in_range = first;
        self
    }

    /// Mark as the last day of a selected range
    pub fn last_in_range(mut self, last: bool) -> Self {
        self.last_in_range = last;
        self
    }

    /// Mark as today
    pub fn today(mut self, today: bool) -> Self {
        self.today = today;
        self
    }

    /// The date this cell shows
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day-of-month label
    pub fn label(&self) -> String {
        self.date.day().to_string()
    }

    /// Whether this cell is unselectable
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this cell is hidden
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether this cell belongs to an adjacent month
    pub fn is_outside(&self) -> bool {
        self.outside
    }

    /// Whether this cell is the selected date
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let mut vars = StyleVars::new();
        vars.set("--day-size", VarValue::Px(self.size.day_size()));
        vars.set(
            "--day-radius",
            VarValue::Px(theme.radius(RadiusToken::Sm)),
        );
        vars.set(
            "--day-selected-bg",
            VarValue::Color(theme.color(ColorToken::Primary)),
        );
        vars.set(
            "--day-range-bg",
            VarValue::Color(theme.color(ColorToken::AccentSubtle)),
        );
        vars
    }

    /// Resolve style variables against the process-wide theme
    pub fn vars(&self) -> StyleVars {
        self.vars_with(&ThemeState::get())
    }

    /// Active state flags
    pub fn mods(&self) -> Mods {
        let mut mods = Mods::new();
        mods.set("selected", self.selected);
        mods.set("weekend", self.weekend);
        mods.set("outside", self.outside);
        mods.set("hidden", self.hidden);
        mods.set("disabled", self.disabled);
        mods.set("in-range", self.in_range);
        mods.set("first-in-range", self.first_in_range);
        mods.set("last-in-range", self.last_in_range);
        mods.set("today", self.today);
        mods
    }
}

// ============================================================================
// Month grid
// ============================================================================

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The 7-column week grid for the month containing `date`
///
/// Leading and trailing cells come from the adjacent months so every week
/// row is complete. The number of weeks varies with the month.
pub fn month_weeks(date: NaiveDate, first_day_of_week: Weekday) -> Vec<Vec<NaiveDate>> {
    let first = first_of_month(date);
    let next_first = first
        .checked_add_months(Months::new(1))
        .unwrap_or(first);
    let days_in_month = next_first.signed_duration_since(first).num_days();

    let offset = (first.weekday().num_days_from_monday() + 7
        - first_day_of_week.num_days_from_monday())
        % 7;
    let start = first
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(first);

    let total = i64::from(offset) + days_in_month;
    let weeks = (total as u64).div_ceil(7) as usize;

    let mut days = start.iter_days();
    (0..weeks)
        .map(|_| (0..7).filter_map(|_| days.next()).collect())
        .collect()
}

// ============================================================================
// Calendar widget
// ============================================================================

/// Every recognized calendar option
pub struct CalendarConfig {
    pub value: Option<NaiveDate>,
    pub default_value: Option<NaiveDate>,
    pub on_change: Option<ChangeHandler<NaiveDate>>,
    pub on_next: Option<Arc<dyn Fn(NaiveDate) + Send + Sync>>,
    pub on_previous: Option<Arc<dyn Fn(NaiveDate) + Send + Sync>>,
    pub size: CalendarSize,
    pub first_day_of_week: Weekday,
    pub weekend_days: Vec<Weekday>,
    /// Side-by-side months shown at once
    pub number_of_columns: usize,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub hide_outside_dates: bool,
}

/// The calendar component
pub struct Calendar {
    config: CalendarConfig,
    store: Uncontrolled<NaiveDate>,
    displayed_month: NaiveDate,
    resolver: Option<VarsResolver>,
}

impl Calendar {
    /// Create a calendar displaying the current month
    pub fn new() -> Self {
        let config = CalendarConfig {
            value: None,
            default_value: None,
            on_change: None,
            on_next: None,
            on_previous: None,
            size: CalendarSize::default(),
            first_day_of_week: Weekday::Mon,
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            number_of_columns: 1,
            min_date: None,
            max_date: None,
            hide_outside_dates: false,
        };
        let store = build_store(&config);
        let displayed_month = first_of_month(chrono::Local::now().date_naive());
        Self {
            config,
            store,
            displayed_month,
            resolver: None,
        }
    }

    /// Supply the selected date every rebuild (controlled mode)
    pub fn value(mut self, value: NaiveDate) -> Self {
        self.config.value = Some(value);
        self.store = build_store(&self.config);
        self.displayed_month = first_of_month(value);
        self
    }

    /// Seed the selected date (uncontrolled mode)
    pub fn default_value(mut self, value: NaiveDate) -> Self {
        self.config.default_value = Some(value);
        self.store = build_store(&self.config);
        self.displayed_month = first_of_month(value);
        self
    }

    /// Set the initially displayed month without selecting a date
    pub fn default_month(mut self, month: NaiveDate) -> Self {
        self.displayed_month = first_of_month(month);
        self
    }

    /// Set the selection change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(NaiveDate) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(move |date: &NaiveDate| callback(*date)));
        self.store = build_store(&self.config);
        self
    }

    /// Set the callback fired after navigating to the next month
    pub fn on_next<F>(mut self, callback: F) -> Self
    where
        F: Fn(NaiveDate) + Send + Sync + 'static,
    {
        self.config.on_next = Some(Arc::new(callback));
        self
    }

    /// Set the callback fired after navigating to the previous month
    pub fn on_previous<F>(mut self, callback: F) -> Self
    where
        F: Fn(NaiveDate) + Send + Sync + 'static,
    {
        self.config.on_previous = Some(Arc::new(callback));
        self
    }

    /// Set the size
    pub fn size(mut self, size: CalendarSize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the first day of the week (default Monday)
    pub fn first_day_of_week(mut self, day: Weekday) -> Self {
        self.config.first_day_of_week = day;
        self
    }

    /// Set the weekend days (default Saturday and Sunday)
    pub fn weekend_days<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        self.config.weekend_days = days.into_iter().collect();
        self
    }

    /// Show several consecutive months side by side
    pub fn number_of_columns(mut self, columns: usize) -> Self {
        self.config.number_of_columns = columns.max(1);
        self
    }

    /// Disallow selecting dates before `date`
    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.config.min_date = Some(date);
        self
    }

    /// Disallow selecting dates after `date`
    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.config.max_date = Some(date);
        self
    }

    /// Hide leading and trailing outside-month cells
    pub fn hide_outside_dates(mut self, hide: bool) -> Self {
        self.config.hide_outside_dates = hide;
        self
    }

    /// Replace the built-in style-variable resolution
    pub fn vars_resolver(mut self, resolver: VarsResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// The selected date, if any
    pub fn selected(&self) -> Option<NaiveDate> {
        self.store.get()
    }

    /// First day of the displayed month
    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    /// First days of every displayed month, one per column
    pub fn months(&self) -> Vec<NaiveDate> {
        (0..self.config.number_of_columns)
            .filter_map(|offset| {
                self.displayed_month
                    .checked_add_months(Months::new(offset as u32))
            })
            .collect()
    }

    /// Week grid for the displayed month
    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        self.weeks_of(self.displayed_month)
    }

    /// Week grid for one displayed month column
    pub fn weeks_of(&self, month: NaiveDate) -> Vec<Vec<NaiveDate>> {
        month_weeks(month, self.config.first_day_of_week)
    }

    /// Whether a date can be selected under the min/max bounds
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        if self.config.min_date.is_some_and(|min| date < min) {
            return false;
        }
        if self.config.max_date.is_some_and(|max| date > max) {
            return false;
        }
        true
    }

    /// Snapshot of one day cell relative to the displayed month
    pub fn day(&self, date: NaiveDate) -> Day {
        self.day_of(date, self.displayed_month)
    }

    /// Snapshot of one day cell relative to an explicit month column
    pub fn day_of(&self, date: NaiveDate, month: NaiveDate) -> Day {
        let outside = first_of_month(date) != first_of_month(month);
        Day::new(date)
            .size(self.config.size)
            .selected(self.selected() == Some(date))
            .weekend(self.config.weekend_days.contains(&date.weekday()))
            .outside(outside)
            .hidden(outside && self.config.hide_outside_dates)
            .disabled(!self.is_selectable(date))
            .today(date == chrono::Local::now().date_naive())
    }

    /// Select a date
    ///
    /// Selection outside the min/max bounds is rejected: no state change, no
    /// callback. Returns whether the selection was accepted.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if !self.is_selectable(date) {
            tracing::trace!(%date, "selection outside date bounds rejected");
            return false;
        }
        self.store.set(date);
        true
    }

    /// Navigate to the next month
    pub fn next_month(&mut self) {
        if let Some(next) = self.displayed_month.checked_add_months(Months::new(1)) {
            self.displayed_month = next;
            if let Some(ref callback) = self.config.on_next {
                callback(next);
            }
        }
    }

    /// Navigate to the previous month
    pub fn previous_month(&mut self) {
        if let Some(previous) = self.displayed_month.checked_sub_months(Months::new(1)) {
            self.displayed_month = previous;
            if let Some(ref callback) = self.config.on_previous {
                callback(previous);
            }
        }
    }

    /// Resolve style variables against an explicit theme snapshot
    pub fn vars_with(&self, theme: &ThemeState) -> StyleVars {
        let mut vars = StyleVars::new();
        vars.set("--day-size", VarValue::Px(self.config.size.day_size()));
        vars.set(
            "--calendar-radius",
            VarValue::Px(theme.radius(RadiusToken::Md)),
        );
        vars.set(
            "--calendar-header-color",
            VarValue::Color(theme.color(ColorToken::TextPrimary)),
        );

        match &self.resolver {
            Some(resolver) => resolver(theme, &vars),
            None => vars,
        }
    }

    /// Resolve style variables against the process-wide theme
    pub fn vars(&self) -> StyleVars {
        self.vars_with(&ThemeState::get())
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

fn build_store(config: &CalendarConfig) -> Uncontrolled<NaiveDate> {
    let mut store_config = UncontrolledConfig::new();
    store_config.value = config.value;
    store_config.default_value = config.default_value;
    store_config.on_change = config.on_change.clone();
    Uncontrolled::new(store_config)
}

/// Create a calendar
pub fn calendar() -> Calendar {
    Calendar::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn date(input: &str) -> NaiveDate {
        parse_date(input).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
        assert!(matches!(
            parse_date("January 15"),
            Err(DateParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_month_weeks_exact_fit() {
        // February 2021 starts on a Monday and has exactly 28 days
        let weeks = month_weeks(date("2021-02-10"), Weekday::Mon);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], date("2021-02-01"));
        assert_eq!(weeks[3][6], date("2021-02-28"));
    }

    #[test]
    fn test_month_weeks_includes_outside_days() {
        // January 2026 starts on a Thursday
        let weeks = month_weeks(date("2026-01-15"), Weekday::Mon);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date("2025-12-29"));
        assert_eq!(weeks[0][3], date("2026-01-01"));
        assert_eq!(weeks[4][6], date("2026-02-01"));
        assert!(weeks.iter().all(|week| week.len() == 7));
    }

    #[test]
    fn test_month_weeks_sunday_start() {
        let weeks = month_weeks(date("2026-01-15"), Weekday::Sun);
        assert_eq!(weeks[0][0], date("2025-12-28"));
        assert_eq!(weeks[4][6], date("2026-01-31"));
    }

    #[test]
    fn test_select_fires_on_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut calendar = calendar()
            .default_month(date("2026-01-01"))
            .on_change(move |d| sink.lock().unwrap().push(d));

        assert!(calendar.select(date("2026-01-15")));
        assert_eq!(calendar.selected(), Some(date("2026-01-15")));
        assert_eq!(*seen.lock().unwrap(), vec![date("2026-01-15")]);
    }

    #[test]
    fn test_out_of_bounds_selection_rejected() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut calendar = calendar()
            .min_date(date("2026-01-10"))
            .max_date(date("2026-01-20"))
            .on_change(move |d| sink.lock().unwrap().push(d));

        assert!(!calendar.select(date("2026-01-05")));
        assert!(!calendar.select(date("2026-01-25")));
        assert!(calendar.select(date("2026-01-10")));
        assert_eq!(*seen.lock().unwrap(), vec![date("2026-01-10")]);
    }

    #[test]
    fn test_out_of_bounds_days_are_disabled() {
        let calendar = calendar()
            .default_month(date("2026-01-01"))
            .min_date(date("2026-01-10"));
        assert!(calendar.day(date("2026-01-05")).is_disabled());
        assert!(!calendar.day(date("2026-01-10")).is_disabled());
    }

    #[test]
    fn test_month_navigation_fires_callbacks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let next_sink = seen.clone();
        let prev_sink = seen.clone();
        let mut calendar = calendar()
            .default_month(date("2026-01-01"))
            .on_next(move |m| next_sink.lock().unwrap().push(m))
            .on_previous(move |m| prev_sink.lock().unwrap().push(m));

        calendar.next_month();
        assert_eq!(calendar.displayed_month(), date("2026-02-01"));
        calendar.previous_month();
        calendar.previous_month();
        assert_eq!(calendar.displayed_month(), date("2025-12-01"));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![date("2026-02-01"), date("2026-01-01"), date("2025-12-01")]
        );
    }

    #[test]
    fn test_number_of_columns_lists_consecutive_months() {
        let calendar = calendar()
            .default_month(date("2025-11-01"))
            .number_of_columns(3);
        assert_eq!(
            calendar.months(),
            vec![date("2025-11-01"), date("2025-12-01"), date("2026-01-01")]
        );
    }

    #[test]
    fn test_default_value_seeds_selection_and_month() {
        let calendar = calendar().default_value(date("2026-03-15"));
        assert_eq!(calendar.selected(), Some(date("2026-03-15")));
        assert_eq!(calendar.displayed_month(), date("2026-03-01"));
    }

    #[test]
    fn test_controlled_value_wins_over_selection() {
        let mut calendar = calendar().value(date("2026-01-10"));
        calendar.select(date("2026-01-20"));
        assert_eq!(calendar.selected(), Some(date("2026-01-10")));
    }

    #[test]
    fn test_day_snapshot_flags() {
        let calendar = calendar()
            .default_value(date("2026-01-10"))
            .hide_outside_dates(true);

        let selected = calendar.day(date("2026-01-10"));
        assert!(selected.is_selected());
        // 2026-01-10 is a Saturday
        assert!(selected.mods().has("weekend"));

        let outside = calendar.day(date("2025-12-29"));
        assert!(outside.is_outside());
        assert!(outside.is_hidden());
        assert!(!outside.is_selected());
    }

    #[test]
    fn test_custom_weekend_days() {
        let calendar = calendar()
            .default_month(date("2026-01-01"))
            .weekend_days([Weekday::Fri, Weekday::Sat]);
        // 2026-01-02 is a Friday, 2026-01-04 a Sunday
        assert!(calendar.day(date("2026-01-02")).mods().has("weekend"));
        assert!(!calendar.day(date("2026-01-04")).mods().has("weekend"));
    }

    #[test]
    fn test_day_vars_follow_size() {
        let day = Day::new(date("2026-01-10")).size(CalendarSize::Large);
        let theme = ThemeState::from_theme(&petal_theme::DefaultTheme::light());
        assert_eq!(
            day.vars_with(&theme).get("--day-size"),
            Some(&VarValue::Px(42.0))
        );
    }

    #[test]
    fn test_range_flags_surface_as_mods() {
        let day = Day::new(date("2026-01-12"))
            .in_range(true)
            .first_in_range(true);
        let mods = day.mods();
        assert!(mods.has("in-range"));
        assert!(mods.has("first-in-range"));
        assert!(!mods.has("last-in-range"));
    }
}
