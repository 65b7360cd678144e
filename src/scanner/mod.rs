pub use result::{ScanErr, ScanErrKind, ScanResult, ScanTokensResult};
pub use scanner::{scan_text, Scanner};
pub use token::{Token, TokenWithLocation};

mod result;
mod scanner;
mod token;

#[cfg(test)]
mod tests;
