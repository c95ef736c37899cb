pub mod create_distributor;
pub mod claim_shares;
pub mod claim;
pub mod query;

pub use create_distributor::*;
pub use claim_shares::*;
pub use claim::*;
pub use query::*;
