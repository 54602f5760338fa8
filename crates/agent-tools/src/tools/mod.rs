//! Built-in tool implementations.

mod currency_converter;

pub use currency_converter::{convert_currency, exchange_rate, Conversion, CurrencyConverter};
