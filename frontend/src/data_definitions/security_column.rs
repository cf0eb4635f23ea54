//! Columns the securities table knows how to render.

use common::security::Security;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityColumn {
    Name,
    Type,
    Currency,
    Private,
}

pub const DEFAULT_SECURITY_COLUMNS: [SecurityColumn; 4] = [SecurityColumn::Name, SecurityColumn::Type, SecurityColumn::Currency, SecurityColumn::Private];

impl SecurityColumn {
    pub fn header(&self) -> &'static str {
        match self {
            SecurityColumn::Name => "Name",
            SecurityColumn::Type => "Type",
            SecurityColumn::Currency => "Currency",
            SecurityColumn::Private => "Private",
        }
    }

    pub fn cell(&self, security: &Security) -> String {
        match self {
            SecurityColumn::Name => security.name.clone(),
            SecurityColumn::Type => security.security_type.clone(),
            SecurityColumn::Currency => security.currency.clone(),
            SecurityColumn::Private => if security.is_private { "Yes" } else { "No" }.to_string(),
        }
    }
}
