use anyhow::Context;
use common::security::Security;

const SECURITIES_MOCK_JSON: &str = include_str!("securities_mock.json");

pub fn load_mock_securities() -> anyhow::Result<Vec<Security>> {
    serde_json::from_str(SECURITIES_MOCK_JSON).context("failed to parse bundled securities mock data")
}
