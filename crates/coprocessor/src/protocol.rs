// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::CoprocessorError;

pub use tally_config::{LOCAL_CHAIN_ID, SEPOLIA_CHAIN_ID};

/// Chains a confidential protocol deployment is known for
pub const SUPPORTED_CHAINS: [u64; 2] = [LOCAL_CHAIN_ID, SEPOLIA_CHAIN_ID];

/// Resolve the confidential protocol id for a chain. Deployments are identified by the chain they
/// live on.
pub fn protocol_id_for_chain(chain_id: u64) -> Result<u64, CoprocessorError> {
    if SUPPORTED_CHAINS.contains(&chain_id) {
        Ok(chain_id)
    } else {
        Err(CoprocessorError::ProtocolUnsupported { chain_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_resolution() {
        assert_eq!(protocol_id_for_chain(LOCAL_CHAIN_ID), Ok(LOCAL_CHAIN_ID));
        assert_eq!(protocol_id_for_chain(SEPOLIA_CHAIN_ID), Ok(SEPOLIA_CHAIN_ID));
        assert_eq!(
            protocol_id_for_chain(1),
            Err(CoprocessorError::ProtocolUnsupported { chain_id: 1 })
        );
    }

    #[test]
    fn test_default_config_chain_is_supported() {
        let chain_id = tally_config::PollConfig::default().chain_id;
        assert_eq!(chain_id, LOCAL_CHAIN_ID);
        assert_eq!(protocol_id_for_chain(chain_id), Ok(LOCAL_CHAIN_ID));
    }
}
