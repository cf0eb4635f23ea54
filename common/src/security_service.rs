//! Contract for anything that can answer a securities query.

use crate::query_error::QueryFailure;
use crate::security_query::{SecurityPage, SecurityQuery};

pub trait SecurityQueryService {
    fn query_securities(&self, query: SecurityQuery) -> impl Future<Output = Result<SecurityPage, QueryFailure>> + Send;
}
