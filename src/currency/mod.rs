//! Rendering of balances and transaction amounts for the console.

use crate::config::Config;

/// Presentation preferences applied to every rendered amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountFormat {
    pub symbol: Option<String>,
    pub precision: Option<u8>,
    pub screen_reader_mode: bool,
}

impl AmountFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            symbol: config.currency_symbol.clone(),
            precision: config.amount_precision,
            screen_reader_mode: config.screen_reader_mode,
        }
    }
}

/// Formats `value` with the configured symbol and precision.
///
/// Without a precision the shortest round-trip form is used (`150`, `0`, `100.5`).
pub fn format_amount(value: f64, format: &AmountFormat) -> String {
    let magnitude = value.abs();
    let body = match format.precision {
        Some(precision) => format!("{:.*}", precision as usize, magnitude),
        None => format!("{}", magnitude),
    };
    let symbol = format.symbol.as_deref().unwrap_or("");
    let negative = value < 0.0;

    if format.screen_reader_mode {
        let spoken = if symbol.is_empty() {
            body
        } else {
            format!("{} {}", symbol, body)
        };
        return if negative {
            format!("minus {}", spoken)
        } else {
            spoken
        };
    }

    if negative {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}
