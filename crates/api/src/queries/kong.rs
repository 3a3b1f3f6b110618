//! Kong vault GraphQL queries.

use graphql_client::GraphQLQuery;

/// Kong BigInt scalar (decimal string).
pub type BigInt = String;

/// Query for every Yearn v3 vault Kong indexes.
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema/kong.graphql",
    query_path = "queries/vaults.graphql",
    response_derives = "Debug, Clone",
    variables_derives = "Debug, Clone"
)]
pub struct GetVaultData;

/// Query for a single vault by address and chain.
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema/kong.graphql",
    query_path = "queries/vaults.graphql",
    response_derives = "Debug, Clone",
    variables_derives = "Debug, Clone"
)]
pub struct GetVault;
