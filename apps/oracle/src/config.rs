//! Startup configuration (§4.9, component C9): loaded once from the
//! environment, held immutably behind `Arc` for the process lifetime.

use alloy::primitives::{address, Address, B256};
use alloy::signers::local::PrivateKeySigner;
use astral_models::EvaluationMode;
use std::collections::HashMap;
use std::str::FromStr;

pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiTier {
    Public,
    Developer,
    Internal,
}

impl ApiTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiTier::Public => "public",
            ApiTier::Developer => "developer",
            ApiTier::Internal => "internal",
        }
    }

    fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "public" => Ok(ApiTier::Public),
            "developer" => Ok(ApiTier::Developer),
            "internal" => Ok(ApiTier::Internal),
            other => anyhow::bail!("unknown API key tier: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiKeyEntry {
    pub tier: ApiTier,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub public_cap: u32,
    pub developer_cap: u32,
    pub internal_cap: u32,
}

impl RateLimitConfig {
    pub fn cap_for(&self, tier: ApiTier) -> u32 {
        match tier {
            ApiTier::Public => self.public_cap,
            ApiTier::Developer => self.developer_cap,
            ApiTier::Internal => self.internal_cap,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchemaDefaults {
    pub numeric: Option<B256>,
    pub boolean: Option<B256>,
    pub verify: Option<B256>,
}

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub eas_contract: Address,
    pub schemas: SchemaDefaults,
}

pub struct Config {
    pub signing_key: PrivateKeySigner,
    pub chains: HashMap<u64, ChainConfig>,
    pub api_keys: HashMap<String, ApiKeyEntry>,
    pub body_limit_bytes: usize,
    pub rate_limit: RateLimitConfig,
    pub evaluation_mode: EvaluationMode,
    pub port: u16,
}

/// Chain ids with an EAS deployment known well enough to default the
/// contract address when the environment doesn't override it (§4.9).
fn default_eas_contract(chain_id: u64) -> Option<Address> {
    match chain_id {
        // Base mainnet / Base Sepolia share the same EAS deployment address.
        8453 | 84532 => Some(address!("4200000000000000000000000000000000000021")),
        _ => None,
    }
}

fn env_b256(key: &str) -> anyhow::Result<Option<B256>> {
    match std::env::var(key) {
        Ok(v) if v.is_empty() => Ok(None),
        Ok(v) => Ok(Some(
            B256::from_str(&v).map_err(|e| anyhow::anyhow!("{key}: {e}"))?,
        )),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// Loads configuration from the process environment. Fails fast with a
    /// descriptive error on any missing required variable, before the
    /// server binds a socket.
    pub fn from_env() -> anyhow::Result<Self> {
        let signing_key_hex = std::env::var("ASTRAL_SIGNING_KEY")
            .map_err(|_| anyhow::anyhow!("ASTRAL_SIGNING_KEY is required"))?;
        let signing_key = PrivateKeySigner::from_str(&signing_key_hex)
            .map_err(|e| anyhow::anyhow!("ASTRAL_SIGNING_KEY is not a valid private key: {e}"))?;

        let chain_ids_raw = std::env::var("ASTRAL_CHAIN_IDS")
            .unwrap_or_else(|_| "1,11155111,8453,84532".to_string());
        let mut chains = HashMap::new();
        for raw_id in chain_ids_raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let chain_id: u64 = raw_id
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid chain id in ASTRAL_CHAIN_IDS: {raw_id}"))?;

            let rpc_url = std::env::var(format!("ASTRAL_CHAIN_{chain_id}_RPC_URL"))
                .map_err(|_| anyhow::anyhow!("ASTRAL_CHAIN_{chain_id}_RPC_URL is required"))?;

            let eas_contract = match std::env::var(format!("ASTRAL_CHAIN_{chain_id}_EAS_CONTRACT"))
            {
                Ok(v) => Address::from_str(&v)
                    .map_err(|e| anyhow::anyhow!("ASTRAL_CHAIN_{chain_id}_EAS_CONTRACT: {e}"))?,
                Err(_) => default_eas_contract(chain_id).ok_or_else(|| {
                    anyhow::anyhow!("ASTRAL_CHAIN_{chain_id}_EAS_CONTRACT is required (no default for this chain)")
                })?,
            };

            let schemas = SchemaDefaults {
                numeric: env_b256(&format!("ASTRAL_CHAIN_{chain_id}_SCHEMA_NUMERIC"))?,
                boolean: env_b256(&format!("ASTRAL_CHAIN_{chain_id}_SCHEMA_BOOLEAN"))?,
                verify: env_b256(&format!("ASTRAL_CHAIN_{chain_id}_SCHEMA_VERIFY"))?,
            };

            chains.insert(
                chain_id,
                ChainConfig {
                    chain_id,
                    rpc_url,
                    eas_contract,
                    schemas,
                },
            );
        }

        let api_keys = match std::env::var("ASTRAL_API_KEYS_JSON") {
            Ok(raw) if !raw.is_empty() => parse_api_keys(&raw)?,
            _ => HashMap::new(),
        };

        let body_limit_bytes = std::env::var("ASTRAL_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        let rate_limit = RateLimitConfig {
            window_secs: std::env::var("ASTRAL_RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RATE_LIMIT_WINDOW_SECS),
            public_cap: std::env::var("ASTRAL_RATE_LIMIT_PUBLIC")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            developer_cap: std::env::var("ASTRAL_RATE_LIMIT_DEVELOPER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            internal_cap: std::env::var("ASTRAL_RATE_LIMIT_INTERNAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        };

        let evaluation_mode = match std::env::var("ASTRAL_EVALUATION_MODE")
            .unwrap_or_else(|_| "local".to_string())
            .as_str()
        {
            "local" => EvaluationMode::Local,
            "tee" => EvaluationMode::Tee,
            "zk" => EvaluationMode::Zk,
            other => anyhow::bail!("unknown ASTRAL_EVALUATION_MODE: {other}"),
        };

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Ok(Self {
            signing_key,
            chains,
            api_keys,
            body_limit_bytes,
            rate_limit,
            evaluation_mode,
            port,
        })
    }
}

fn parse_api_keys(raw: &str) -> anyhow::Result<HashMap<String, ApiKeyEntry>> {
    #[derive(serde::Deserialize)]
    struct RawEntry {
        tier: String,
        label: String,
    }
    let parsed: HashMap<String, RawEntry> =
        serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("ASTRAL_API_KEYS_JSON: {e}"))?;
    parsed
        .into_iter()
        .map(|(key, entry)| {
            Ok((
                key,
                ApiKeyEntry {
                    tier: ApiTier::parse(&entry.tier)?,
                    label: entry.label,
                },
            ))
        })
        .collect()
}
