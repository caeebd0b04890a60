// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

/// Maximum init code size per EIP-3860
pub const DEFAULT_MAX_INIT_CODE_SIZE: u64 = 49_152;

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub max_init_code_size: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_init_code_size: DEFAULT_MAX_INIT_CODE_SIZE,
        }
    }
}
