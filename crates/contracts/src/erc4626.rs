//! ERC4626 and Yearn V3 vault view interfaces.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC4626 {
        function asset() external view returns (address);
        function totalAssets() external view returns (uint256);
        function convertToAssets(uint256 shares) external view returns (uint256 assets);
    }
}

sol! {
    #[sol(rpc)]
    interface IYearnVault {
        function apiVersion() external view returns (string);
    }
}
