//! Supported currencies offered by the dashboard converter

/// Display metadata for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

const fn info(code: &'static str, name: &'static str, symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo { code, name, symbol }
}

/// The fixed list of selectable currencies
pub static CURRENCIES: [CurrencyInfo; 20] = [
    info("USD", "US Dollar", "$"),
    info("EUR", "Euro", "€"),
    info("GBP", "British Pound", "£"),
    info("INR", "Indian Rupee", "₹"),
    info("JPY", "Japanese Yen", "¥"),
    info("AUD", "Australian Dollar", "A$"),
    info("CAD", "Canadian Dollar", "C$"),
    info("CHF", "Swiss Franc", "CHF"),
    info("CNY", "Chinese Yuan", "¥"),
    info("SEK", "Swedish Krona", "kr"),
    info("NZD", "New Zealand Dollar", "NZ$"),
    info("MXN", "Mexican Peso", "MX$"),
    info("SGD", "Singapore Dollar", "S$"),
    info("HKD", "Hong Kong Dollar", "HK$"),
    info("NOK", "Norwegian Krone", "kr"),
    info("KRW", "South Korean Won", "₩"),
    info("TRY", "Turkish Lira", "₺"),
    info("RUB", "Russian Ruble", "₽"),
    info("BRL", "Brazilian Real", "R$"),
    info("ZAR", "South African Rand", "R"),
];

/// Look up a currency by code (case-sensitive, uppercase)
#[must_use]
pub fn find(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Symbol for a code, or the code itself when it is not in the catalog
#[must_use]
pub fn symbol_for(code: &str) -> &str {
    find(code).map_or(code, |c| c.symbol)
}

/// Name for a code, or the code itself when it is not in the catalog
#[must_use]
pub fn name_for(code: &str) -> &str {
    find(code).map_or(code, |c| c.name)
}
