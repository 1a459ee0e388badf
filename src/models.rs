use std::fmt;
use std::fmt::Formatter;

/// One forecast entry reduced to what gets printed
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub timestamp: String,
    pub temperature: f64,
    pub precipitation: f64,
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} | {}°C, {} mm precipitation", self.timestamp, self.temperature, self.precipitation)
    }
}
