//! Numeric scroller: a bounded decimal range exposed as discrete options.
//!
//! The option index and the decimal value are two views of the same
//! state and are kept in sync on every mutation:
//! `value == minimum + selected_index * increment`.

use crate::scroller::ScrollerOptions;
use framemenu_core::{MenuError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Decimal range scroller with a fixed increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericScroller {
    value: Decimal,
    minimum: Decimal,
    maximum: Decimal,
    increment: Decimal,
    selected_index: usize,
    decimal_places: u32,
    thousands_separator: bool,
    hexadecimal: bool,
}

impl Default for NumericScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericScroller {
    /// Create a scroller over `[0, 100]` in steps of `0.5`, starting at
    /// the middle option.
    #[must_use]
    pub fn new() -> Self {
        let mut scroller = Self {
            value: Decimal::ZERO,
            minimum: Decimal::ZERO,
            maximum: Decimal::ONE_HUNDRED,
            increment: Decimal::new(5, 1),
            selected_index: 0,
            decimal_places: 2,
            thousands_separator: false,
            hexadecimal: false,
        };
        scroller.set_selected_index(scroller.option_count() / 2);
        scroller
    }

    /// Create a scroller over `[minimum, maximum]` stepping by `increment`,
    /// starting at `minimum`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidIncrement`] if `increment <= 0`.
    pub fn with_range(minimum: Decimal, maximum: Decimal, increment: Decimal) -> Result<Self> {
        if increment <= Decimal::ZERO {
            return Err(MenuError::InvalidIncrement(increment.to_string()));
        }
        let mut scroller = Self {
            value: minimum,
            minimum,
            maximum: maximum.max(minimum),
            increment,
            ..Self::new()
        };
        scroller.set_selected_index(0);
        Ok(scroller)
    }

    // === Accessors ===

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub const fn minimum(&self) -> Decimal {
        self.minimum
    }

    /// Upper bound.
    #[must_use]
    pub const fn maximum(&self) -> Decimal {
        self.maximum
    }

    /// Step between options.
    #[must_use]
    pub const fn increment(&self) -> Decimal {
        self.increment
    }

    /// Decimal places used when formatting.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Whether formatting groups thousands.
    #[must_use]
    pub const fn thousands_separator(&self) -> bool {
        self.thousands_separator
    }

    /// Whether formatting uses base 16.
    #[must_use]
    pub const fn hexadecimal(&self) -> bool {
        self.hexadecimal
    }

    // === Mutators ===

    /// Set the current value.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::ValueOutOfRange`] if `value` is outside
    /// `[minimum, maximum]`, or [`MenuError::ValueNotOnStep`] if it does
    /// not land exactly on an option. The scroller is unchanged on error.
    pub fn set_value(&mut self, value: Decimal) -> Result<()> {
        if value == self.value {
            return Ok(());
        }
        if value < self.minimum || value > self.maximum {
            return Err(MenuError::ValueOutOfRange {
                value: value.to_string(),
                minimum: self.minimum.to_string(),
                maximum: self.maximum.to_string(),
            });
        }
        let on_step = (value - self.minimum)
            .checked_rem(self.increment)
            .is_some_and(|r| r.is_zero());
        if !on_step {
            return Err(MenuError::ValueNotOnStep {
                value: value.to_string(),
                increment: self.increment.to_string(),
            });
        }

        // Ranges with more options than `usize` can index only address a
        // prefix of the range.
        let index = self.steps_from_minimum(value);
        if index >= self.option_count() || self.value_at(index) != Some(value) {
            return Err(MenuError::ValueOutOfRange {
                value: value.to_string(),
                minimum: self.minimum.to_string(),
                maximum: self.last_addressable_value().to_string(),
            });
        }

        self.value = value;
        self.selected_index = index;
        Ok(())
    }

    /// Set the lower bound. Raises the maximum if it would fall below,
    /// then re-clamps and re-aligns the value.
    pub fn set_minimum(&mut self, minimum: Decimal) {
        self.minimum = minimum;
        if self.minimum > self.maximum {
            self.maximum = self.minimum;
        }
        self.value = self.value.clamp(self.minimum, self.maximum);
        self.sync_index_from_value();
    }

    /// Set the upper bound. Lowers the minimum if it would rise above,
    /// then re-clamps and re-aligns the value.
    pub fn set_maximum(&mut self, maximum: Decimal) {
        self.maximum = maximum;
        if self.minimum > self.maximum {
            self.minimum = self.maximum;
        }
        self.value = self.value.clamp(self.minimum, self.maximum);
        self.sync_index_from_value();
    }

    /// Set the step between options.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidIncrement`] if `increment <= 0`.
    pub fn set_increment(&mut self, increment: Decimal) -> Result<()> {
        if increment <= Decimal::ZERO {
            return Err(MenuError::InvalidIncrement(increment.to_string()));
        }
        self.increment = increment;
        self.sync_index_from_value();
        Ok(())
    }

    /// Set decimal places used when formatting.
    pub fn set_decimal_places(&mut self, places: u32) {
        self.decimal_places = places;
    }

    /// Enable or disable thousands grouping.
    pub fn set_thousands_separator(&mut self, enabled: bool) {
        self.thousands_separator = enabled;
    }

    /// Enable or disable base-16 display.
    pub fn set_hexadecimal(&mut self, enabled: bool) {
        self.hexadecimal = enabled;
    }

    // === Builders ===

    /// Set decimal places used when formatting.
    #[must_use]
    pub const fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Enable thousands grouping.
    #[must_use]
    pub const fn with_thousands_separator(mut self, enabled: bool) -> Self {
        self.thousands_separator = enabled;
        self
    }

    /// Enable base-16 display.
    #[must_use]
    pub const fn with_hexadecimal(mut self, enabled: bool) -> Self {
        self.hexadecimal = enabled;
        self
    }

    // === Stepping ===

    /// Decrease the value by one increment, stopping at the minimum.
    pub fn step_left(&mut self) {
        let next = match self.value.checked_sub(self.increment) {
            Some(v) => v.max(self.minimum),
            None => {
                warn!(value = %self.value, "numeric scroller underflow, clamping to minimum");
                self.minimum
            }
        };
        self.value = next;
        self.sync_index_from_value();
    }

    /// Increase the value by one increment, stopping at the maximum.
    pub fn step_right(&mut self) {
        let next = match self.value.checked_add(self.increment) {
            Some(v) => v.min(self.maximum),
            None => {
                warn!(value = %self.value, "numeric scroller overflow, clamping to maximum");
                self.maximum
            }
        };
        self.value = next;
        self.sync_index_from_value();
    }

    // === Formatting ===

    /// Format the current value for display.
    #[must_use]
    pub fn format_value(&self) -> String {
        if self.hexadecimal {
            let whole = self.value.trunc().to_i64().unwrap_or(if self.value.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            });
            return format!("{whole:X}");
        }

        let mut rounded = self
            .value
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        let text = format!("{:.*}", self.decimal_places as usize, rounded);
        if self.thousands_separator {
            group_thousands(&text)
        } else {
            text
        }
    }

    // === Internals ===

    /// Whole number of increments between `minimum` and `v`, saturating
    /// at `usize::MAX`.
    fn steps_from_minimum(&self, v: Decimal) -> usize {
        v.checked_sub(self.minimum)
            .and_then(|d| d.checked_div(self.increment))
            .map_or(usize::MAX, |d| {
                d.trunc().to_usize().unwrap_or(if d.is_sign_negative() {
                    0
                } else {
                    usize::MAX
                })
            })
    }

    fn value_at(&self, index: usize) -> Option<Decimal> {
        self.increment
            .checked_mul(Decimal::from(index))
            .and_then(|offset| self.minimum.checked_add(offset))
    }

    fn last_addressable_value(&self) -> Decimal {
        self.value_at(self.option_count().saturating_sub(1))
            .map_or(self.maximum, |v| v.min(self.maximum))
    }

    fn sync_index_from_value(&mut self) {
        self.set_selected_index(self.steps_from_minimum(self.value));
    }
}

impl ScrollerOptions for NumericScroller {
    fn option_count(&self) -> usize {
        self.steps_from_minimum(self.maximum).saturating_add(1)
    }

    fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn set_selected_index(&mut self, index: usize) {
        let index = index.min(self.option_count().saturating_sub(1));
        let value = self.value_at(index).unwrap_or(self.maximum);
        self.selected_index = index;
        self.value = value.min(self.maximum);
    }

    fn selected_option_text(&self) -> String {
        self.format_value()
    }
}

/// Insert `,` between groups of three integer digits.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = text
        .strip_prefix('-')
        .map_or(("", text), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
