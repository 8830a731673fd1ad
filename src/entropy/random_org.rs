//! Random.org atmospheric noise service.
//!
//! The integer generator answers with one decimal value per line when
//! asked for `format=plain`.

use super::provider::{check_length, EntropyProvider, ProviderError};
use super::SourceInfo;
use reqwest::blocking::Client;

/// Secondary physical provider backed by random.org.
pub struct RandomOrgProvider {
    client: Client,
    endpoint: String,
}

impl RandomOrgProvider {
    /// Provenance reported for Random.org bytes.
    pub const INFO: SourceInfo = SourceInfo {
        name: "Random.org",
        detail: "Atmospheric noise",
        is_physical: true,
        is_quantum: false,
    };

    /// Creates a provider calling `endpoint` with a shared client.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl EntropyProvider for RandomOrgProvider {
    fn info(&self) -> &SourceInfo {
        &Self::INFO
    }

    fn fetch(&mut self, count: usize) -> Result<Vec<u8>, ProviderError> {
        let num = count.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("num", num.as_str()),
                ("min", "0"),
                ("max", "255"),
                ("col", "1"),
                ("base", "10"),
                ("format", "plain"),
                ("rnd", "new"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_plain(&body, count)
    }
}

/// Parses newline-separated decimal integers into exactly `count` bytes.
pub fn parse_plain(body: &str, count: usize) -> Result<Vec<u8>, ProviderError> {
    let bytes = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u8>()
                .map_err(|e| ProviderError::Malformed(format!("{line:?}: {e}")))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    check_length(bytes, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_lines() {
        let body = "12\n0\n255\n7\n";
        assert_eq!(parse_plain(body, 4).unwrap(), vec![12, 0, 255, 7]);
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let body = "3\r\n\r\n9\r\n";
        assert_eq!(parse_plain(body, 2).unwrap(), vec![3, 9]);
    }

    #[test]
    fn test_parse_error_message() {
        let body = "Error: You have used your quota of random bits for today.";
        assert!(matches!(
            parse_plain(body, 1),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            parse_plain("1\n300\n", 2),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_count_mismatch() {
        assert!(matches!(
            parse_plain("1\n2\n", 3),
            Err(ProviderError::ShortRead { expected: 3, got: 2 })
        ));
    }
}
