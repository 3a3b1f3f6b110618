//! Yearn APR oracle interface definitions.

use alloy::primitives::{address, Address};
use alloy::sol;

/// Address of the Yearn V3 APR oracle. The oracle is deployed at the same
/// address on every supported chain.
pub const APR_ORACLE_ADDRESS: Address = address!("1981AD9F44F2EA9aDd2dC4AD7D075c102C70aF92");

sol! {
    #[sol(rpc)]
    interface IAprOracle {
        // APR of a vault after its total assets change by `_delta`.
        function getExpectedApr(address _vault, int256 _delta) external view returns (uint256);

        // APR of a single strategy after its debt changes by `_debtChange`.
        function getStrategyApr(address _strategy, int256 _debtChange) external view returns (uint256);

        // Current APR reported by the vault's own accounting.
        function getCurrentApr(address _vault) external view returns (uint256);
    }
}
